//! File tree rendering.
//!
//! Folders are collapsible and start open. Names are shown with the
//! current search query marked.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{TREE_BASE_PADDING_PX, TREE_INDENT_PX};
use crate::core::Action;
use crate::models::{FileNode, FileType};
use crate::utils::split_matches;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

fn indent_style(depth: usize) -> String {
    format!(
        "padding-left: {}px",
        TREE_BASE_PADDING_PX + depth * TREE_INDENT_PX
    )
}

fn file_icon(path: &str) -> icondata::Icon {
    match FileType::from_path(path) {
        FileType::Markdown => ic::FILE_TEXT,
        FileType::Image => ic::FILE_IMAGE,
        FileType::Text => ic::FILE,
    }
}

/// Render a list of sibling nodes at `depth`.
///
/// Rebuilt whenever the filtered tree changes, so folders always show the
/// children of the current result.
#[component]
pub fn TreeNodes(nodes: Vec<FileNode>, depth: usize) -> AnyView {
    nodes
        .into_iter()
        .map(|node| match node {
            folder @ FileNode::Folder { .. } => {
                view! { <FolderNode folder=folder depth=depth /> }.into_any()
            }
            FileNode::File { name, path } => {
                view! { <FileItem name=name path=path depth=depth /> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

#[component]
fn FolderNode(folder: FileNode, depth: usize) -> AnyView {
    let (open, set_open) = signal(true);
    let children = folder.children().to_vec();

    view! {
        <div class=css::folder role="group" data-path=folder.path().to_string()>
            <button
                class=css::row
                style=indent_style(depth)
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class=css::chevron>
                    {move || {
                        let icon = if open.get() { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
                        view! { <Icon icon=icon /> }
                    }}
                </span>
                <span class=css::icon>
                    {move || {
                        let icon = if open.get() { ic::FOLDER_OPEN } else { ic::FOLDER };
                        view! { <Icon icon=icon /> }
                    }}
                </span>
                <HighlightedName name=folder.name().to_string() />
            </button>
            <Show when=move || open.get()>
                <TreeNodes nodes=children.clone() depth=depth + 1 />
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn FileItem(name: String, path: String, depth: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = file_icon(&path);
    let path_for_select = path.clone();
    let is_selected = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.selection
                .as_ref()
                .is_some_and(|sel| sel.path == path_for_select)
        })
    });
    let path_for_click = path.clone();

    view! {
        <button
            class=move || {
                if is_selected.get() {
                    format!("{} {} {}", css::row, css::fileRow, css::selected)
                } else {
                    format!("{} {}", css::row, css::fileRow)
                }
            }
            style=indent_style(depth)
            title=path
            on:click=move |_| ctx.dispatch(Action::SelectFile(path_for_click.clone()))
        >
            <span class=css::icon>
                <Icon icon=icon />
            </span>
            <HighlightedName name=name />
        </button>
    }
}

/// A node name with query matches wrapped in `<mark>`.
#[component]
fn HighlightedName(name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let query = Memo::new(move |_| ctx.state.with(|s| s.search_query.clone()));

    view! {
        <span class=css::name>
            {move || {
                query.with(|q| {
                    split_matches(&name, q)
                        .into_iter()
                        .map(|run| {
                            let text = run.text.to_string();
                            if run.matched {
                                Either::Left(view! { <mark class=css::mark>{text}</mark> })
                            } else {
                                Either::Right(text)
                            }
                        })
                        .collect_view()
                })
            }}
        </span>
    }
}
