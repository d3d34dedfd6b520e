//! HTML markup for rendered buttons.

use minijinja::Environment;
use once_cell::sync::OnceCell;

use super::config::ButtonConfig;
use super::element::InteractiveElement;
use super::render::render;
use crate::error::RenderError;

const TEMPLATE_NAME: &str = "button.html";

static SHARED: OnceCell<MarkupRenderer> = OnceCell::new();

/// Markup template for a push button.
///
/// Registered under an `.html` name so minijinja escapes every interpolated
/// value, including the label in the `aria-label` attribute.
pub const BUTTON_TEMPLATE: &str = r#"<button type="{{ kind }}" class="{{ class }}" aria-label="{{ label }}">{{ label }}</button>"#;

/// A renderer with the button template pre-compiled.
///
/// [`render_html`] and the catalog go through [`MarkupRenderer::shared`], so
/// the template is compiled once per process.
///
/// # Example
///
/// ```rust
/// use pushbutton::{render, ButtonConfig, MarkupRenderer};
///
/// let renderer = MarkupRenderer::new().unwrap();
/// let element = render(ButtonConfig::new("Button")).unwrap();
/// let html = renderer.to_html(&element).unwrap();
/// assert!(html.starts_with(r#"<button type="button""#));
/// ```
pub struct MarkupRenderer {
    env: Environment<'static>,
}

impl MarkupRenderer {
    /// Creates a renderer and compiles the button template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, BUTTON_TEMPLATE)?;
        Ok(Self { env })
    }

    /// The process-wide renderer, compiled on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to compile. A failed build is
    /// retried on the next call.
    pub fn shared() -> Result<&'static MarkupRenderer, RenderError> {
        SHARED.get_or_try_init(MarkupRenderer::new)
    }

    /// Serializes an element to HTML.
    pub fn to_html(&self, element: &InteractiveElement<'_>) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        Ok(tmpl.render(element.view())?)
    }
}

/// Renders a config straight to HTML.
///
/// # Errors
///
/// Returns [`RenderError::Config`] for a rejected configuration, or
/// [`RenderError::Template`] if markup rendering fails.
pub fn render_html(config: ButtonConfig<'_>) -> Result<String, RenderError> {
    let element = render(config)?;
    MarkupRenderer::shared()?.to_html(&element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{ColorToken, VariantToken};

    #[test]
    fn test_solid_dark_markup() {
        let html = render_html(ButtonConfig::new("Button")).unwrap();
        assert_eq!(
            html,
            r#"<button type="button" class="py-2 px-4 rounded bg-gray-800 text-white hover:bg-gray-700" aria-label="Button">Button</button>"#
        );
    }

    #[test]
    fn test_outlined_green_markup() {
        let html = render_html(
            ButtonConfig::new("Go")
                .variant(VariantToken::Outlined)
                .color(ColorToken::Green),
        )
        .unwrap();
        assert!(html.contains("border border-green-600 text-green-600"));
        assert!(html.contains(r#"aria-label="Go""#));
    }

    #[test]
    fn test_label_is_escaped_in_text_and_attribute() {
        let html = render_html(ButtonConfig::new(r#"<b>"Save"</b>"#)).unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains(r#"aria-label="<"#));
        assert_eq!(html.matches("&lt;b&gt;").count(), 2);
    }

    #[test]
    fn test_renderer_is_reusable() {
        let renderer = MarkupRenderer::new().unwrap();
        let first = render(ButtonConfig::new("A")).unwrap();
        let second = render(ButtonConfig::new("B").color(ColorToken::Green)).unwrap();
        assert!(renderer.to_html(&first).unwrap().ends_with(">A</button>"));
        assert!(renderer.to_html(&second).unwrap().contains("bg-green-600"));
    }

    #[test]
    fn test_shared_renderer_is_built_once() {
        let first = MarkupRenderer::shared().unwrap();
        render_html(ButtonConfig::new("A")).unwrap();
        render_html(ButtonConfig::new("B")).unwrap();
        let second = MarkupRenderer::shared().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_render_html_surfaces_config_errors() {
        let result = render_html(ButtonConfig::new(""));
        assert!(matches!(result, Err(RenderError::Config(_))));
    }
}
