//! Archive upload screen.
//!
//! Shown until an archive has been processed successfully. Displays the
//! processing state and the failure message of the last upload.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use web_sys::HtmlInputElement;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{ACCEPTED_ARCHIVE_TYPES, APP_NAME, APP_VERSION};

stylance::import_crate_style!(css, "src/components/upload.module.css");

#[component]
pub fn FileUpload() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let loading = Memo::new(move |_| ctx.state.with(|s| s.loading));
    let error = Memo::new(move |_| ctx.state.with(|s| s.error.clone()));

    let on_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            ctx.upload(file);
        }
        // Picking the same file again must fire another change event
        input.set_value("");
    };

    view! {
        <div class=css::upload>
            <div class=css::card>
                <span class=css::icon>
                    <Icon icon=ic::UPLOAD />
                </span>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::hint>"Upload a ZIP archive of your project to browse its documentation."</p>

                <label class=move || {
                    if loading.get() {
                        format!("{} {}", css::picker, css::pickerBusy)
                    } else {
                        css::picker.to_string()
                    }
                }>
                    <input
                        type="file"
                        class=css::input
                        accept=ACCEPTED_ARCHIVE_TYPES
                        disabled=move || loading.get()
                        on:change=on_change
                    />
                    <Show
                        when=move || loading.get()
                        fallback=|| view! { <span>"Choose ZIP file"</span> }
                    >
                        <span class=css::spinner></span>
                        <span>"Processing..."</span>
                    </Show>
                </label>

                {move || error.get().map(|message| view! {
                    <p class=css::error role="alert">{message}</p>
                })}

                <p class=css::version>{format!("v{}", APP_VERSION)}</p>
            </div>
        </div>
    }
}
