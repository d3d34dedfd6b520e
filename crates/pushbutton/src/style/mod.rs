//! Style resolution for buttons.
//!
//! This module provides the styling primitives:
//!
//! - [`StyleTable`]: the static variant/color class table and [`BASE_STYLES`]
//! - [`merge_classes`]: last-wins merging of utility-class lists
//! - [`resolve`]: the merged class string for a `(variant, color)` pair
//!
//! Resolution is pure. Results are computed once per cell and shared for the
//! lifetime of the process.

mod merge;
mod resolver;
mod table;

pub use merge::merge_classes;
pub use resolver::{resolve, resolve_str};
pub use table::{StyleTable, BASE_STYLES};

#[cfg(test)]
pub(crate) use merge::class_key;
