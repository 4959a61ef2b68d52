//! Code block colouring.
//!
//! The Markdown renderer hands every fenced code block to a
//! [`CodeHighlighter`]. In the browser that is Prism.js, reached through
//! the `Prism` global via the Reflect API.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;

use super::dom;

/// Colours source code for display.
pub trait CodeHighlighter {
    /// Colourized HTML for `code`, or `None` when `language` is unknown.
    fn highlight(&self, code: &str, language: &str) -> Option<String>;
}

/// Highlighter backed by the page's `Prism` global.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrismHighlighter;

impl CodeHighlighter for PrismHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        if language.is_empty() {
            return None;
        }
        let window = dom::window()?;
        let prism = Reflect::get(&window, &"Prism".into())
            .ok()?
            .dyn_into::<Object>()
            .ok()?;
        let languages = Reflect::get(&prism, &"languages".into()).ok()?;
        let grammar = Reflect::get(&languages, &language.into()).ok()?;
        if grammar.is_undefined() || grammar.is_null() {
            return None;
        }

        let highlight = Reflect::get(&prism, &"highlight".into())
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        highlight
            .call3(&prism, &code.into(), &grammar, &language.into())
            .ok()?
            .as_string()
    }
}
