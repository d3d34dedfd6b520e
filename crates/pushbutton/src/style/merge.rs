//! Utility-class merging with last-wins conflict resolution.
//!
//! Each class is reduced to a [`ClassKey`]: its sorted modifier prefixes
//! (`hover:`, `md:`) plus the style property it sets. Scanning from the end,
//! the first class seen for a key survives and every earlier class with the
//! same key is dropped. Shorthand properties also claim their axis and side
//! properties, so `px-2 p-4` collapses to `p-4` while `p-4 px-2` keeps both.
//!
//! `bg-`, `text-` and `border-` classes set a color only when the rest is a
//! palette shade (`gray-800`), a named color (`white`) or an arbitrary
//! `[...]` value. `bg-cover` or `text-nowrap` are left to exact matching.
//!
//! Classes this module does not recognize are keyed by their full name, which
//! still collapses exact duplicates.

use std::collections::HashSet;

/// Style property set by a recognized utility class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Property {
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Margin,
    MarginX,
    MarginY,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    BorderRadius,
    BackgroundColor,
    TextColor,
    FontSize,
    TextAlign,
    FontWeight,
    BorderWidth,
    BorderStyle,
    BorderColor,
    Width,
    Height,
}

impl Property {
    /// Narrower properties overridden when this one is declared later.
    fn overrides(self) -> &'static [Property] {
        use Property::*;
        match self {
            Padding => &[
                PaddingX,
                PaddingY,
                PaddingTop,
                PaddingRight,
                PaddingBottom,
                PaddingLeft,
            ],
            PaddingX => &[PaddingRight, PaddingLeft],
            PaddingY => &[PaddingTop, PaddingBottom],
            Margin => &[
                MarginX,
                MarginY,
                MarginTop,
                MarginRight,
                MarginBottom,
                MarginLeft,
            ],
            MarginX => &[MarginRight, MarginLeft],
            MarginY => &[MarginTop, MarginBottom],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Target<'a> {
    Property(Property),
    Exact(&'a str),
}

/// Conflict key of a single utility class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ClassKey<'a> {
    modifiers: String,
    target: Target<'a>,
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const RADIUS_SIZES: &[&str] = &["", "none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const NAMED_COLORS: &[&str] = &["white", "black", "transparent", "current", "inherit"];
const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];
const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Merges class lists left to right; later classes win conflicts.
pub fn merge_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let classes: Vec<&str> = parts.into_iter().flat_map(str::split_whitespace).collect();

    let mut claimed: HashSet<ClassKey<'_>> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

    for &class in classes.iter().rev() {
        let key = class_key(class);
        if claimed.contains(&key) {
            continue;
        }
        if let Target::Property(property) = key.target {
            for narrower in property.overrides() {
                claimed.insert(ClassKey {
                    modifiers: key.modifiers.clone(),
                    target: Target::Property(*narrower),
                });
            }
        }
        claimed.insert(key);
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

/// Splits off modifier prefixes and classifies the remaining utility.
pub(crate) fn class_key(class: &str) -> ClassKey<'_> {
    let (mut modifiers, utility) = split_modifiers(class);
    modifiers.sort_unstable();
    let target = match classify(utility) {
        Some(property) => Target::Property(property),
        None => Target::Exact(utility),
    };
    ClassKey {
        modifiers: modifiers.join(":"),
        target,
    }
}

/// Splits on `:` outside of arbitrary-value brackets.
fn split_modifiers(class: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    (modifiers, &class[start..])
}

fn classify(utility: &str) -> Option<Property> {
    use Property::*;

    if let Some(property) = spacing(utility) {
        return Some(property);
    }
    if utility == "rounded" {
        return Some(BorderRadius);
    }
    if let Some(size) = utility.strip_prefix("rounded-") {
        return (RADIUS_SIZES.contains(&size) || is_arbitrary(size)).then_some(BorderRadius);
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return is_color(rest).then_some(BackgroundColor);
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        if FONT_SIZES.contains(&rest) {
            return Some(FontSize);
        }
        if TEXT_ALIGNS.contains(&rest) {
            return Some(TextAlign);
        }
        return is_color(rest).then_some(TextColor);
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return FONT_WEIGHTS.contains(&rest).then_some(FontWeight);
    }
    if utility == "border" {
        return Some(BorderWidth);
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        if rest.chars().all(|c| c.is_ascii_digit()) && !rest.is_empty() {
            return Some(BorderWidth);
        }
        if BORDER_STYLES.contains(&rest) {
            return Some(BorderStyle);
        }
        return is_color(rest).then_some(BorderColor);
    }
    if let Some(rest) = utility.strip_prefix("w-") {
        return (!rest.is_empty()).then_some(Width);
    }
    if let Some(rest) = utility.strip_prefix("h-") {
        return (!rest.is_empty()).then_some(Height);
    }
    None
}

fn spacing(utility: &str) -> Option<Property> {
    use Property::*;

    let unsigned = utility.strip_prefix('-').unwrap_or(utility);
    let (prefix, value) = unsigned.split_once('-')?;
    if value.is_empty() {
        return None;
    }
    let property = match prefix {
        "p" => Padding,
        "px" => PaddingX,
        "py" => PaddingY,
        "pt" => PaddingTop,
        "pr" => PaddingRight,
        "pb" => PaddingBottom,
        "pl" => PaddingLeft,
        "m" => Margin,
        "mx" => MarginX,
        "my" => MarginY,
        "mt" => MarginTop,
        "mr" => MarginRight,
        "mb" => MarginBottom,
        "ml" => MarginLeft,
        _ => return None,
    };
    // Padding has no negative form.
    if utility.starts_with('-') && prefix.starts_with('p') {
        return None;
    }
    Some(property)
}

/// A named color, a palette shade (`gray-800`, `green-600/50`) or an arbitrary value.
fn is_color(value: &str) -> bool {
    if is_arbitrary(value) {
        return true;
    }
    let color = value.split_once('/').map_or(value, |(color, _)| color);
    if NAMED_COLORS.contains(&color) {
        return true;
    }
    match color.rsplit_once('-') {
        Some((name, shade)) => PALETTE.contains(&name) && SHADES.contains(&shade),
        None => false,
    }
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}
