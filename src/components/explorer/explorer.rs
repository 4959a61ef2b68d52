//! Main explorer component.
//!
//! Search box over the archive tree. Typing filters the tree by file name
//! and text content; an empty query shows everything.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::TreeNodes;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Action;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let query = Memo::new(move |_| ctx.state.with(|s| s.search_query.clone()));
    let visible = Memo::new(move |_| ctx.state.with(|s| s.visible_tree()));
    let archive_empty = Memo::new(move |_| ctx.state.with(|s| s.contents.is_empty()));

    view! {
        <div class=css::explorer>
            <div class=css::search>
                <span class=css::searchIcon>
                    <Icon icon=ic::SEARCH />
                </span>
                <input
                    type="text"
                    class=css::searchInput
                    placeholder="Search files..."
                    aria-label="Search files"
                    prop:value=move || query.get()
                    on:input=move |ev| ctx.dispatch(Action::SetSearchQuery(event_target_value(&ev)))
                />
                <Show when=move || !query.get().is_empty()>
                    <button
                        class=css::clearButton
                        title="Clear search"
                        on:click=move |_| ctx.dispatch(Action::SetSearchQuery(String::new()))
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
            </div>

            <nav class=format!("{} scrollbar-thin", css::tree) aria-label="Files">
                {move || {
                    let nodes = visible.get();
                    if !nodes.is_empty() {
                        view! { <TreeNodes nodes=nodes depth=0 /> }.into_any()
                    } else if archive_empty.get() {
                        view! { <p class=css::empty>"This archive contains no files."</p> }.into_any()
                    } else {
                        view! { <p class=css::empty>"No results found."</p> }.into_any()
                    }
                }}
            </nav>
        </div>
    }
}
