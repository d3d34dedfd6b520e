//! Recording click handler for catalog entries.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::button::ClickHandler;

/// A click handler that counts its activations.
///
/// Catalog entries bind every story to the same spy so a viewer (or a test)
/// can observe that activation reached the handler.
pub struct ClickSpy {
    calls: Rc<Cell<usize>>,
    handler: Box<dyn Fn()>,
}

impl ClickSpy {
    pub fn new() -> Self {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let handler = Box::new(move || counter.set(counter.get() + 1));
        Self { calls, handler }
    }

    /// The handler to pass into a button config.
    pub fn handler(&self) -> ClickHandler<'_> {
        &*self.handler
    }

    /// Number of activations recorded so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }
}

impl Default for ClickSpy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClickSpy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickSpy")
            .field("calls", &self.calls())
            .finish()
    }
}
