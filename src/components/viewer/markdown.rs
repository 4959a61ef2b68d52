//! Rendered Markdown document.

use leptos::prelude::*;

use super::DiagramBlock;
use crate::utils::{DocumentBlock, PrismHighlighter, RenderOptions, render_blocks};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Markdown source rendered to HTML, with each diagram block rendered on
/// its own.
///
/// Blocks are keyed by position and content, so diagrams survive query
/// changes that only touch the surrounding text.
#[component]
pub fn MarkdownView(source: String, query: Memo<String>) -> impl IntoView {
    let blocks = Memo::new(move |_| {
        query.with(|q| render_blocks(&source, &RenderOptions::new(&PrismHighlighter).with_query(q)))
    });

    view! {
        <div class=css::markdown>
            <For
                each=move || blocks.get().into_iter().enumerate()
                key=|(index, block)| (*index, block.clone())
                children=move |(_, block)| match block {
                    DocumentBlock::Html(html) => view! { <div inner_html=html></div> }.into_any(),
                    DocumentBlock::Diagram(definition) => {
                        view! { <DiagramBlock definition=definition /> }.into_any()
                    }
                }
            />
        </div>
    }
}
