//! View seam between the controller and the UI toolkit
//!
//! The core never talks to a concrete toolkit. Whatever renders the widget
//! implements [`ConverterView`] and forwards user events into the controller;
//! the controller pushes programmatic updates back out through this trait.

/// Which of the two conversion fields an event or write refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSide {
    /// The left/top field; active by default
    Source,
    /// The right/bottom field
    Target,
}

impl FieldSide {
    /// The opposite side
    pub fn other(&self) -> FieldSide {
        match self {
            FieldSide::Source => FieldSide::Target,
            FieldSide::Target => FieldSide::Source,
        }
    }
}

/// Presentation surface the controller writes to
///
/// Implementations wrap the toolkit's text fields and rate label. A toolkit
/// text field typically raises its own change notification when written
/// programmatically; implementations do not need to suppress that echo, the
/// controller's guard flag ignores it.
pub trait ConverterView {
    /// Write a formatted value into one field's text widget
    fn set_field_text(&mut self, side: FieldSide, text: &str);

    /// Update the "1 USD = 0.93 EUR" style rate label
    fn set_rate_label(&mut self, text: &str);

    /// Visually emphasize the active field (presentation only)
    fn set_emphasis(&mut self, side: FieldSide) {
        let _ = side;
    }
}
