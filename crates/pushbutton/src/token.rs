//! Color and variant tokens.
//!
//! Both sets are closed. Typed callers can only name a valid token; string
//! input goes through [`FromStr`] and fails with
//! [`ConfigError::InvalidConfiguration`] instead of falling back to a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Supported button colors. Defaults to [`ColorToken::Dark`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    #[default]
    Dark,
    Green,
}

impl ColorToken {
    /// Every color, in table order.
    pub const ALL: [ColorToken; 2] = [ColorToken::Dark, ColorToken::Green];

    /// Number of colors; the width of the style table.
    pub const COUNT: usize = Self::ALL.len();

    /// The token as it appears in configuration input.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorToken::Dark => "dark",
            ColorToken::Green => "green",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Supported button variants. Defaults to [`VariantToken::Solid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantToken {
    #[default]
    Solid,
    Outlined,
}

impl VariantToken {
    /// Every variant, in table order.
    pub const ALL: [VariantToken; 2] = [VariantToken::Solid, VariantToken::Outlined];

    /// Number of variants; the height of the style table.
    pub const COUNT: usize = Self::ALL.len();

    /// The token as it appears in configuration input.
    pub fn as_str(self) -> &'static str {
        match self {
            VariantToken::Solid => "solid",
            VariantToken::Outlined => "outlined",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VariantToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::ALL
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| ConfigError::invalid("color", s))
    }
}

impl FromStr for VariantToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariantToken::ALL
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| ConfigError::invalid("variant", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ColorToken::default(), ColorToken::Dark);
        assert_eq!(VariantToken::default(), VariantToken::Solid);
    }

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!("green".parse::<ColorToken>().unwrap(), ColorToken::Green);
        assert_eq!(
            "outlined".parse::<VariantToken>().unwrap(),
            VariantToken::Outlined
        );
    }

    #[test]
    fn test_parse_unknown_color_fails() {
        let err = "purple".parse::<ColorToken>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidConfiguration {
                field: "color",
                value: "purple".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Solid".parse::<VariantToken>().is_err());
        assert!("DARK".parse::<ColorToken>().is_err());
    }

    #[test]
    fn test_indices_match_table_order() {
        for (i, color) in ColorToken::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
        for (i, variant) in VariantToken::ALL.iter().enumerate() {
            assert_eq!(variant.index(), i);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&VariantToken::Outlined).unwrap();
        assert_eq!(json, "\"outlined\"");
        let color: ColorToken = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(color, ColorToken::Green);
    }
}
