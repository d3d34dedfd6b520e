//! Button configuration: the typed builder and the untyped argument form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RenderError};
use crate::token::{ColorToken, VariantToken};

/// Borrowed click handler.
///
/// The caller owns the closure; configs and elements only borrow it and can
/// never outlive it.
pub type ClickHandler<'a> = &'a dyn Fn();

/// Configuration for a single render call.
///
/// # Example
///
/// ```rust
/// use pushbutton::{ButtonConfig, ColorToken, VariantToken};
///
/// let on_click = || println!("clicked");
/// let config = ButtonConfig::new("Save")
///     .color(ColorToken::Green)
///     .variant(VariantToken::Outlined)
///     .on_click(&on_click);
/// ```
#[derive(Clone)]
pub struct ButtonConfig<'a> {
    /// Color token; `dark` when absent.
    pub color: Option<ColorToken>,
    /// Variant token; `solid` when absent.
    pub variant: Option<VariantToken>,
    /// Visible text and accessible name.
    pub label: String,
    /// Activation handler; activation is a no-op when absent.
    pub on_click: Option<ClickHandler<'a>>,
}

impl<'a> ButtonConfig<'a> {
    /// Creates a config with the given label and no color, variant or handler.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            color: None,
            variant: None,
            label: label.into(),
            on_click: None,
        }
    }

    /// Sets the color token.
    pub fn color(mut self, color: ColorToken) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the variant token.
    pub fn variant(mut self, variant: VariantToken) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the activation handler.
    pub fn on_click(mut self, handler: ClickHandler<'a>) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Checks the label policy: blank labels are rejected, others are kept verbatim.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label.trim().is_empty() {
            return Err(ConfigError::MissingLabel);
        }
        Ok(())
    }
}

impl fmt::Debug for ButtonConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("color", &self.color)
            .field("variant", &self.variant)
            .field("label", &self.label)
            .field("on_click", &self.on_click.map(|_| "Fn()"))
            .finish()
    }
}

/// Untyped button arguments, as supplied by JSON input or catalog entries.
///
/// Values are kept as strings until [`ButtonArgs::into_config`], which is
/// where unknown tokens are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ButtonArgs {
    /// Parses arguments from a JSON object.
    ///
    /// ```rust
    /// use pushbutton::ButtonArgs;
    ///
    /// let args = ButtonArgs::from_json(r#"{"variant": "outlined", "label": "Button"}"#).unwrap();
    /// assert_eq!(args.variant.as_deref(), Some("outlined"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Layers `overrides` on top of these arguments; set fields in `overrides` win.
    pub fn merge(self, overrides: ButtonArgs) -> ButtonArgs {
        ButtonArgs {
            color: overrides.color.or(self.color),
            variant: overrides.variant.or(self.variant),
            label: overrides.label.or(self.label),
        }
    }

    /// Validates the arguments and converts them into a typed config.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidConfiguration`] for an unknown color or variant
    /// - [`ConfigError::MissingLabel`] for an absent or blank label
    pub fn into_config<'a>(
        self,
        on_click: Option<ClickHandler<'a>>,
    ) -> Result<ButtonConfig<'a>, ConfigError> {
        let color = self
            .color
            .as_deref()
            .map(str::parse::<ColorToken>)
            .transpose()?;
        let variant = self
            .variant
            .as_deref()
            .map(str::parse::<VariantToken>)
            .transpose()?;
        let config = ButtonConfig {
            color,
            variant,
            label: self.label.ok_or(ConfigError::MissingLabel)?,
            on_click,
        };
        config.validate()?;
        Ok(config)
    }
}
