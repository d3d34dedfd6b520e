//! The static variant/color style table.

use crate::token::{ColorToken, VariantToken};

/// Base styles applied to every button.
pub const BASE_STYLES: &str = "py-2 px-4 rounded";

/// Variant/color specific styles, indexed `[variant][color]`.
///
/// The array shape is derived from the token counts, so a new token without a
/// matching row or column does not compile.
const VARIANT_STYLES: [[&str; ColorToken::COUNT]; VariantToken::COUNT] = [
    // solid
    [
        "bg-gray-800 text-white hover:bg-gray-700",
        "bg-green-600 text-white hover:bg-green-500",
    ],
    // outlined
    [
        "border border-gray-800 text-gray-800 hover:bg-gray-800 hover:text-white",
        "border border-green-600 text-green-600 hover:bg-green-600 hover:text-white",
    ],
];

/// Read-only view over the style table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleTable;

impl StyleTable {
    /// Returns the unmerged classes for a table cell.
    pub fn get(variant: VariantToken, color: ColorToken) -> &'static str {
        VARIANT_STYLES[variant.index()][color.index()]
    }

    /// Iterates every `(variant, color)` cell in table order.
    pub fn cells() -> impl Iterator<Item = (VariantToken, ColorToken, &'static str)> {
        VariantToken::ALL.into_iter().flat_map(|variant| {
            ColorToken::ALL
                .into_iter()
                .map(move |color| (variant, color, StyleTable::get(variant, color)))
        })
    }
}
