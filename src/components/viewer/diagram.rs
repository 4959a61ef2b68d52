//! Inline diagram block.
//!
//! Renders its definition once on mount. A failure only replaces this
//! block with an error box; clicking a rendered diagram opens it in the
//! lightbox.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Action;
use crate::utils::{DiagramState, MermaidRenderer};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

#[component]
pub fn DiagramBlock(definition: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (state, set_state) = signal(DiagramState::Loading);

    spawn_local(async move {
        let resolved = DiagramState::resolve(&MermaidRenderer, &definition).await;
        // The block may have been unmounted while rendering
        set_state.try_set(resolved);
    });

    move || match state.get() {
        DiagramState::Loading => view! {
            <div class=css::diagramLoading>"Loading diagram..."</div>
        }
        .into_any(),
        DiagramState::Failed(message) => view! {
            <div class=css::diagramError role="alert">
                <strong>"Mermaid Diagram Error"</strong>
                <pre>{message}</pre>
            </div>
        }
        .into_any(),
        DiagramState::Rendered(svg) => {
            let svg_for_lightbox = svg.clone();
            view! {
                <div
                    class=css::diagram
                    title="Click to enlarge"
                    on:click=move |_| ctx.dispatch(Action::OpenLightbox(svg_for_lightbox.clone()))
                >
                    <div class=css::diagramSvg inner_html=svg></div>
                    <span class=css::zoomHint>
                        <Icon icon=ic::ZOOM_IN />
                    </span>
                </div>
            }
            .into_any()
        }
    }
}
