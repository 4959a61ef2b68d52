//! Lightbox for rendered diagrams.
//!
//! Closed with Escape, the close button or a click outside the diagram.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::Action;

stylance::import_crate_style!(css, "src/components/lightbox.module.css");

#[component]
pub fn Lightbox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let svg = Memo::new(move |_| ctx.state.with(|s| s.lightbox_svg.clone()));

    move || svg.get().map(|svg| view! { <LightboxOverlay svg=svg /> })
}

#[component]
fn LightboxOverlay(svg: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let close = move || ctx.dispatch(Action::CloseLightbox);

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    // Focus the overlay on mount for keyboard events
    let container_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(el) = container_ref.get() {
            let _ = el.focus();
        }
    });

    view! {
        <div
            node_ref=container_ref
            tabindex="-1"
            class=css::overlay
            role="dialog"
            aria-modal="true"
            on:keydown=handle_keydown
            on:click=move |_| close()
        >
            <button
                class=css::closeButton
                title="Close (Esc)"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    close();
                }
            >
                <Icon icon=ic::CLOSE />
            </button>
            <div
                class=css::content
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                inner_html=svg
            ></div>
        </div>
    }
}
