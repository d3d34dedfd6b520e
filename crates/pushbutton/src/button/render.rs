//! Config to element.

use super::config::ButtonConfig;
use super::element::InteractiveElement;
use crate::error::ConfigError;
use crate::style::resolve;

/// Renders a button config into an interactive element.
///
/// Absent color and variant default to `dark` and `solid`. The handler is
/// forwarded untouched.
///
/// # Errors
///
/// Returns [`ConfigError::MissingLabel`] if the label is empty or whitespace.
///
/// # Example
///
/// ```rust
/// use pushbutton::{render, ButtonConfig};
///
/// let element = render(ButtonConfig::new("Save")).unwrap();
/// assert_eq!(element.accessible_name(), "Save");
/// assert!(element.class().contains("bg-gray-800"));
/// ```
pub fn render(config: ButtonConfig<'_>) -> Result<InteractiveElement<'_>, ConfigError> {
    if let Err(err) = config.validate() {
        tracing::warn!(error = %err, "rejected button configuration");
        return Err(err);
    }

    let variant = config.variant.unwrap_or_default();
    let color = config.color.unwrap_or_default();
    let class = resolve(variant, color);
    tracing::debug!(%variant, %color, label = %config.label, "rendering button");

    Ok(InteractiveElement::new(
        config.label,
        class,
        config.on_click,
    ))
}
