//! Diagram rendering.
//!
//! Mermaid definitions are rendered to SVG by the page's `mermaid`
//! global. Each call is independent; a failure only affects that diagram.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::dom;
use crate::config::diagram::{ID_PREFIX, SECURITY_LEVEL, THEME};
use crate::core::error::DiagramError;

/// Renders a diagram definition to SVG markup.
#[allow(async_fn_in_trait)]
pub trait DiagramRenderer {
    async fn render(&self, definition: &str) -> Result<String, DiagramError>;
}

/// Display state of one diagram block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagramState {
    Loading,
    /// Rendered SVG markup
    Rendered(String),
    /// Error message shown in place of the diagram
    Failed(String),
}

impl DiagramState {
    /// Render `definition`, turning any failure into [`DiagramState::Failed`].
    pub async fn resolve<R: DiagramRenderer>(renderer: &R, definition: &str) -> Self {
        match renderer.render(definition).await {
            Ok(svg) => Self::Rendered(svg),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Renderer backed by Mermaid.js.
#[derive(Clone, Copy, Debug, Default)]
pub struct MermaidRenderer;

static INITIALIZED: AtomicBool = AtomicBool::new(false);
static NEXT_ID: AtomicU32 = AtomicU32::new(0);

impl DiagramRenderer for MermaidRenderer {
    async fn render(&self, definition: &str) -> Result<String, DiagramError> {
        let mermaid = get_mermaid()?;
        if !INITIALIZED.load(Ordering::Relaxed) {
            initialize(&mermaid)?;
            INITIALIZED.store(true, Ordering::Relaxed);
        }

        let render = method(&mermaid, "render")?;
        let id = format!("{}{}", ID_PREFIX, NEXT_ID.fetch_add(1, Ordering::Relaxed));
        let promise: Promise = render
            .call2(&mermaid, &id.into(), &definition.into())
            .map_err(render_error)?
            .into();

        let result = JsFuture::from(promise).await.map_err(|e| {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&e);
            render_error(e)
        })?;

        Reflect::get(&result, &"svg".into())
            .ok()
            .and_then(|svg| svg.as_string())
            .ok_or(DiagramError::InvalidOutput)
    }
}

/// Get the `mermaid` object loaded by the page.
fn get_mermaid() -> Result<Object, DiagramError> {
    let window = dom::window().ok_or(DiagramError::Unavailable)?;
    Reflect::get(&window, &"mermaid".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(DiagramError::Unavailable)
}

fn method(target: &Object, name: &str) -> Result<Function, DiagramError> {
    Reflect::get(target, &name.into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(DiagramError::Unavailable)
}

/// Call `mermaid.initialize({ startOnLoad, securityLevel, theme })`.
fn initialize(mermaid: &Object) -> Result<(), DiagramError> {
    let config = Object::new();
    for (key, value) in [
        ("startOnLoad", JsValue::FALSE),
        ("securityLevel", SECURITY_LEVEL.into()),
        ("theme", THEME.into()),
    ] {
        Reflect::set(&config, &key.into(), &value).map_err(|_| DiagramError::Unavailable)?;
    }

    method(mermaid, "initialize")?
        .call1(mermaid, &config)
        .map_err(render_error)?;
    Ok(())
}

fn render_error(value: JsValue) -> DiagramError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    DiagramError::Render(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::markdown::{DocumentBlock, RenderOptions, render_blocks};
    use crate::utils::syntax::CodeHighlighter;

    /// Accepts only definitions starting with `graph`.
    struct FakeRenderer;

    impl DiagramRenderer for FakeRenderer {
        async fn render(&self, definition: &str) -> Result<String, DiagramError> {
            if definition.starts_with("graph") {
                Ok(format!("<svg><text>{}</text></svg>", definition))
            } else {
                Err(DiagramError::Render(format!(
                    "Parse error on line 1: {}",
                    definition
                )))
            }
        }
    }

    struct NoHighlight;

    impl CodeHighlighter for NoHighlight {
        fn highlight(&self, _code: &str, _language: &str) -> Option<String> {
            None
        }
    }

    #[tokio::test]
    async fn test_resolve_rendered() {
        let state = DiagramState::resolve(&FakeRenderer, "graph TD").await;
        assert_eq!(
            state,
            DiagramState::Rendered("<svg><text>graph TD</text></svg>".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_failure_is_local() {
        let state = DiagramState::resolve(&FakeRenderer, "nonsense").await;
        assert_eq!(
            state,
            DiagramState::Failed("Parse error on line 1: nonsense".to_string())
        );
    }

    #[tokio::test]
    async fn test_invalid_diagram_keeps_rest_of_document() {
        let doc = "# Guide\n\n```mermaid\nnonsense {{\n```\n\n```mermaid\ngraph LR\n```\n\nThe end.";
        let blocks = render_blocks(doc, &RenderOptions::new(&NoHighlight));

        let mut html = Vec::new();
        let mut diagrams = Vec::new();
        for block in blocks {
            match block {
                DocumentBlock::Html(h) => html.push(h),
                DocumentBlock::Diagram(d) => {
                    diagrams.push(DiagramState::resolve(&FakeRenderer, &d).await)
                }
            }
        }

        assert!(html[0].contains("<h1>Guide</h1>"));
        assert!(html[1].contains("The end."));
        assert!(matches!(&diagrams[0], DiagramState::Failed(m) if m.contains("nonsense")));
        assert!(matches!(&diagrams[1], DiagramState::Rendered(svg) if svg.starts_with("<svg>")));
    }

    #[test]
    fn test_unavailable_message() {
        assert_eq!(
            DiagramError::Unavailable.to_string(),
            "diagram renderer not available"
        );
    }
}
