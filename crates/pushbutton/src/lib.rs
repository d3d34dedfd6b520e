//! # Pushbutton - Styled Push Button Component
//!
//! `pushbutton` renders a single push-button control whose utility classes
//! are resolved from a small, closed set of colors and variants.
//!
//! ## Concepts
//!
//! - **Tokens**: [`ColorToken`] (`dark`, `green`) and [`VariantToken`]
//!   (`solid`, `outlined`). Absent tokens default to `dark` and `solid`.
//! - **Style resolution**: [`resolve`] merges [`BASE_STYLES`] with the
//!   [`StyleTable`] cell for the pair. Later classes override conflicting
//!   earlier ones, so the result never declares the same property twice.
//! - **Rendering**: [`render`] turns a [`ButtonConfig`] into an
//!   [`InteractiveElement`] whose visible text and accessible name are the
//!   label. [`MarkupRenderer`] serializes elements to HTML.
//! - **Catalog**: [`catalog::Catalog`] holds the `Solid` and `Outlined`
//!   stories used for visual inspection.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use pushbutton::{render, ButtonConfig, ColorToken};
//!
//! let clicks = Cell::new(0);
//! let on_click = || clicks.set(clicks.get() + 1);
//!
//! let button = render(
//!     ButtonConfig::new("Go")
//!         .color(ColorToken::Green)
//!         .on_click(&on_click),
//! )
//! .unwrap();
//!
//! assert_eq!(button.text(), "Go");
//! assert!(button.class().contains("bg-green-600"));
//!
//! button.activate();
//! assert_eq!(clicks.get(), 1);
//! ```
//!
//! ## Untyped Input
//!
//! Configuration arriving as JSON is validated when converted, so an unknown
//! token fails instead of rendering an unstyled button:
//!
//! ```rust
//! use pushbutton::{ButtonArgs, ConfigError};
//!
//! let args = ButtonArgs::from_json(r#"{"variant": "ghost", "label": "Go"}"#).unwrap();
//! assert!(matches!(
//!     args.into_config(None),
//!     Err(ConfigError::InvalidConfiguration { field: "variant", .. })
//! ));
//! ```

mod button;
pub mod catalog;
mod error;
mod style;
mod token;

pub use button::{
    render, render_html, ButtonArgs, ButtonConfig, ClickHandler, ElementKind, InteractiveElement,
    MarkupRenderer, BUTTON_TEMPLATE,
};
pub use error::{ConfigError, RenderError};
pub use style::{merge_classes, resolve, resolve_str, StyleTable, BASE_STYLES};
pub use token::{ColorToken, VariantToken};
