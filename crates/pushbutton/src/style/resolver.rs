//! Resolved class strings per table cell.

use once_cell::sync::Lazy;

use super::merge::merge_classes;
use super::table::{StyleTable, BASE_STYLES};
use crate::error::ConfigError;
use crate::token::{ColorToken, VariantToken};

type ResolvedTable = [[String; ColorToken::COUNT]; VariantToken::COUNT];

static RESOLVED: Lazy<ResolvedTable> = Lazy::new(|| {
    tracing::debug!("building resolved button style table");
    VariantToken::ALL.map(|variant| {
        ColorToken::ALL.map(|color| merge_classes([BASE_STYLES, StyleTable::get(variant, color)]))
    })
});

/// Returns the merged class string for a variant and color.
///
/// The base styles come first and the variant/color classes override any
/// conflicting base class.
///
/// # Example
///
/// ```rust
/// use pushbutton::{resolve, ColorToken, VariantToken};
///
/// let classes = resolve(VariantToken::Solid, ColorToken::Green);
/// assert_eq!(classes, "py-2 px-4 rounded bg-green-600 text-white hover:bg-green-500");
/// ```
pub fn resolve(variant: VariantToken, color: ColorToken) -> &'static str {
    &RESOLVED[variant.index()][color.index()]
}

/// Resolves from configuration strings, applying defaults for absent values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] if either value is not a
/// recognized token.
pub fn resolve_str(
    variant: Option<&str>,
    color: Option<&str>,
) -> Result<&'static str, ConfigError> {
    let variant = variant
        .map(str::parse::<VariantToken>)
        .transpose()?
        .unwrap_or_default();
    let color = color
        .map(str::parse::<ColorToken>)
        .transpose()?
        .unwrap_or_default();
    Ok(resolve(variant, color))
}
