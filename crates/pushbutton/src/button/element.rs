//! The rendered push-button element.

use std::fmt;

use serde::Serialize;

use super::config::ClickHandler;

/// Control kind of a rendered element.
///
/// Only push-button semantics exist: a single activation with no toggle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Button,
}

impl ElementKind {
    /// Value of the HTML `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Button => "button",
        }
    }
}

/// A single interactive control produced by [`render`](crate::render).
///
/// The visible text and the accessible name are the same stored string, so
/// they cannot diverge.
#[derive(Clone)]
pub struct InteractiveElement<'a> {
    kind: ElementKind,
    label: String,
    class: &'static str,
    on_click: Option<ClickHandler<'a>>,
}

impl<'a> InteractiveElement<'a> {
    pub(crate) fn new(
        label: String,
        class: &'static str,
        on_click: Option<ClickHandler<'a>>,
    ) -> Self {
        Self {
            kind: ElementKind::Button,
            label,
            class,
            on_click,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Visible text.
    pub fn text(&self) -> &str {
        &self.label
    }

    /// Accessible name exposed to assistive technology.
    pub fn accessible_name(&self) -> &str {
        &self.label
    }

    /// Resolved class string.
    pub fn class(&self) -> &'static str {
        self.class
    }

    pub fn has_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Delivers one activation.
    ///
    /// Calls the handler once with no arguments. A panic inside the handler
    /// propagates to the caller. Without a handler this does nothing.
    pub fn activate(&self) {
        if let Some(handler) = self.on_click {
            handler();
        }
    }

    pub(crate) fn view(&self) -> ElementView<'_> {
        ElementView {
            kind: self.kind.as_str(),
            class: self.class,
            label: &self.label,
        }
    }
}

/// Elements are equal when every attribute matches and both borrow the same
/// handler (or neither has one).
impl PartialEq for InteractiveElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        let same_handler = match (self.on_click, other.on_click) {
            (Some(a), Some(b)) => std::ptr::addr_eq(a as *const dyn Fn(), b as *const dyn Fn()),
            (None, None) => true,
            _ => false,
        };
        self.kind == other.kind
            && self.label == other.label
            && self.class == other.class
            && same_handler
    }
}

impl fmt::Debug for InteractiveElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveElement")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("class", &self.class)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

/// Template context for markup rendering.
#[derive(Debug, Serialize)]
pub(crate) struct ElementView<'v> {
    pub kind: &'static str,
    pub class: &'v str,
    pub label: &'v str,
}
