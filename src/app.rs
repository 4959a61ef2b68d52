//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the upload
//! flow that feeds archive processing results back into [`AppState`].

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::components::{Explorer, FileUpload, Lightbox, Viewer};
use crate::config::APP_NAME;
use crate::core::error::{ArchiveError, ProcessingError};
use crate::core::{Action, AppState, ZipDecoder, process_archive};
use crate::models::ViewPhase;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Application-wide context.
///
/// Holds the single [`AppState`] signal. Components read it with
/// `with`/`get` and change it only through [`AppContext::dispatch`].
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal, which
/// is cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub state: RwSignal<AppState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AppState::new()),
        }
    }

    /// Apply an action to the application state.
    ///
    /// A no-op once the owning view has been disposed, so results of
    /// uploads that outlive the app are dropped.
    pub fn dispatch(&self, action: Action) {
        self.state.try_update(|state| state.apply(action));
    }

    /// Start processing `file` as a new archive.
    ///
    /// Clears the current view immediately. The result is applied only if
    /// no newer upload (or reset) happened in the meantime.
    pub fn upload(&self, file: web_sys::File) {
        let ctx = *self;
        ctx.dispatch(Action::BeginUpload);
        let generation = ctx.state.with_untracked(|state| state.generation);

        spawn_local(async move {
            let result = match dom::read_file_bytes(&file).await {
                Ok(bytes) => process_archive(&ZipDecoder, bytes).await,
                Err(_e) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::error_1(&_e);
                    Err(ProcessingError::from(ArchiveError::Malformed(
                        "file could not be read".to_string(),
                    )))
                }
            };
            ctx.dispatch(Action::UploadFinished { generation, result });
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Shows the upload screen until an archive is ready, then the workspace
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let ready = Memo::new(move |_| ctx.state.with(|s| s.phase == ViewPhase::Ready));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fatal>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Show when=move || ready.get() fallback=|| view! { <FileUpload /> }>
                <Workspace />
            </Show>
            <Lightbox />
        </ErrorBoundary>
    }
}

/// Sidebar with the explorer next to the content viewer.
#[component]
fn Workspace() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sidebar_open = Memo::new(move |_| ctx.state.with(|s| s.sidebar_open));
    let file_count = Memo::new(move |_| ctx.state.with(|s| s.contents.len()));

    view! {
        <div class=css::workspace>
            <button
                class=css::menuButton
                title="Toggle file list"
                on:click=move |_| ctx.dispatch(Action::SetSidebarOpen(!sidebar_open.get_untracked()))
            >
                <Icon icon=ic::MENU />
            </button>

            <aside class=move || {
                if sidebar_open.get() {
                    format!("{} {}", css::sidebar, css::sidebarOpen)
                } else {
                    css::sidebar.to_string()
                }
            }>
                <header class=css::sidebarHeader>
                    <div>
                        <h1 class=css::title>{APP_NAME}</h1>
                        <span class=css::subtitle>
                            {move || match file_count.get() {
                                1 => "1 file".to_string(),
                                n => format!("{} files", n),
                            }}
                        </span>
                    </div>
                    <button
                        class=css::iconButton
                        title="Upload another archive"
                        on:click=move |_| ctx.dispatch(Action::Reset)
                    >
                        <Icon icon=ic::RESET />
                    </button>
                </header>
                <Explorer />
            </aside>

            <main class=css::main>
                <Viewer />
            </main>
        </div>
    }
}
