//! Main content viewer.
//!
//! Presentation depends on the entry classification: Markdown is
//! rendered, images are shown inline and everything else is displayed as
//! plain text with search matches marked.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::MarkdownView;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{EntryContent, FileType};
use crate::utils::highlight_matches;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

#[component]
pub fn Viewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let selected = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.selected()
                .map(|(path, content)| (path.to_string(), content.clone()))
        })
    });
    let query = Memo::new(move |_| ctx.state.with(|s| s.search_query.clone()));

    view! {
        <div class=css::viewer>
            {move || match selected.get() {
                Some((path, content)) => {
                    view! { <Document path=path content=content query=query /> }.into_any()
                }
                None => view! {
                    <div class=css::placeholder>
                        <span class=css::placeholderIcon>
                            <Icon icon=ic::FILE_TEXT />
                        </span>
                        <p>"Select a file to view its contents."</p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn Document(path: String, content: EntryContent, query: Memo<String>) -> impl IntoView {
    let file_name = path.rsplit('/').next().unwrap_or_default().to_string();

    let body = match (FileType::from_path(&path), content) {
        (FileType::Image, EntryContent::DataUri(uri)) => view! {
            <div class=css::image>
                <img src=uri alt=file_name />
            </div>
        }
        .into_any(),
        (FileType::Markdown, EntryContent::Text(source)) => {
            view! { <MarkdownView source=source query=query /> }.into_any()
        }
        (_, content) => view! {
            <pre class=css::text>
                <code inner_html=move || query.with(|q| highlight_matches(content.as_str(), q))></code>
            </pre>
        }
        .into_any(),
    };

    view! {
        <article class=css::document>
            <header class=css::header>
                <span class=css::path>{path}</span>
            </header>
            {body}
        </article>
    }
}
