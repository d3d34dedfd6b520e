//! The push-button component.
//!
//! - [`ButtonConfig`] / [`ButtonArgs`]: typed and untyped input
//! - [`render`]: config to [`InteractiveElement`]
//! - [`MarkupRenderer`]: element to HTML

mod config;
mod element;
mod markup;
mod render;

pub use config::{ButtonArgs, ButtonConfig, ClickHandler};
pub use element::{ElementKind, InteractiveElement};
pub use markup::{render_html, MarkupRenderer, BUTTON_TEMPLATE};
pub use render::render;
