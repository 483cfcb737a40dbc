//! Conversion controller and synchronization state machine
//!
//! Two fields, one rate table, and an "active side" pointer. Every user event
//! triggers at most one propagation from the active field into the other
//! field, never the reverse, so the pair can never oscillate.

use crate::currency::Currency;
use crate::format::format_amount;
use crate::rates::RateTable;
use crate::view::{ConverterView, FieldSide};
use std::sync::Arc;

/// User interaction delivered into the controller
///
/// The view layer translates toolkit callbacks into these and feeds them to
/// [`ConversionController::handle_event`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConverterEvent {
    /// A field received keyboard focus
    FocusGained(FieldSide),
    /// A field's text changed, with the new contents
    TextChanged(FieldSide, String),
    /// A currency selector changed, with the new selection
    CurrencyChanged(FieldSide, Currency),
}

/// Model state for one conversion field
#[derive(Debug, Clone)]
struct FieldState {
    /// Mirror of the widget's text contents
    text: String,
    /// Currently selected currency
    currency: Currency,
    /// Guard flag: a programmatic update to this field is in flight
    suppress: bool,
}

impl FieldState {
    fn new(currency: Currency) -> Self {
        Self {
            text: String::new(),
            currency,
            suppress: false,
        }
    }
}

/// State machine keeping the two conversion fields numerically consistent
///
/// The field last given focus is *active*: its amount and currency are
/// authoritative, and edits flow one way into the other field. The inactive
/// field's change events are ignored (its listener is logically detached),
/// and the guard flag on the written field swallows the change notification
/// that the programmatic write itself raises. Both gates together make a
/// propagation terminate after exactly one field write.
///
/// Single-threaded: every event runs to completion on the thread that
/// delivers it.
pub struct ConversionController<V: ConverterView> {
    rates: Arc<RateTable>,
    view: V,
    source: FieldState,
    target: FieldState,
    active: FieldSide,
}

impl<V: ConverterView> ConversionController<V> {
    /// Create a controller over a shared rate table
    ///
    /// The source side starts active; no propagation runs until the first
    /// event arrives.
    pub fn new(
        rates: Arc<RateTable>,
        source_currency: Currency,
        target_currency: Currency,
        view: V,
    ) -> Self {
        Self {
            rates,
            view,
            source: FieldState::new(source_currency),
            target: FieldState::new(target_currency),
            active: FieldSide::Source,
        }
    }

    /// Dispatch a single event
    pub fn handle_event(&mut self, event: ConverterEvent) {
        match event {
            ConverterEvent::FocusGained(side) => self.focus_gained(side),
            ConverterEvent::TextChanged(side, text) => self.text_changed(side, &text),
            ConverterEvent::CurrencyChanged(side, currency) => self.currency_changed(side, currency),
        }
    }

    /// A field gained focus: it becomes the authoritative side
    pub fn focus_gained(&mut self, side: FieldSide) {
        log::debug!("focus gained on {:?}", side);
        self.active = side;
        self.view.set_emphasis(side);
    }

    /// A field's text changed
    ///
    /// Ignored entirely when the field's guard flag is set (the change is our
    /// own write echoing back) or when the field is not active (its listener
    /// is detached). Otherwise records the text and propagates.
    pub fn text_changed(&mut self, side: FieldSide, text: &str) {
        if self.field(side).suppress {
            log::trace!("suppressed change on {:?}", side);
            return;
        }

        self.field_mut(side).text = text.to_string();

        if side != self.active {
            log::trace!("inactive edit on {:?}, not propagating", side);
            return;
        }

        self.propagate();
    }

    /// A currency selector changed
    ///
    /// Propagation is keyed off the *active* field regardless of which
    /// selector was touched, so changing the inactive field's currency still
    /// recomputes from the active field's amount.
    pub fn currency_changed(&mut self, side: FieldSide, currency: Currency) {
        log::debug!("currency on {:?} -> {}", side, currency);
        self.field_mut(side).currency = currency;
        self.propagate();
    }

    /// Read the active field, convert, and write the other field
    fn propagate(&mut self) {
        let from = self.active;
        let to = from.other();

        // Empty or malformed text degrades to zero, never an error.
        let amount: f64 = self.field(from).text.trim().parse().unwrap_or(0.0);
        let rate = self
            .rates
            .lookup(self.field(from).currency, self.field(to).currency);
        let formatted = format_amount(amount * rate);

        self.field_mut(to).suppress = true;
        self.field_mut(to).text = formatted.clone();
        self.view.set_field_text(to, &formatted);
        // A toolkit text field raises its own change notification on a
        // programmatic write; deliver that echo while the guard is up.
        self.text_changed(to, &formatted);
        self.field_mut(to).suppress = false;

        let label = format!(
            "1 {} = {} {}",
            self.field(from).currency,
            format_amount(rate),
            self.field(to).currency
        );
        self.view.set_rate_label(&label);

        log::debug!(
            "propagated {:?} -> {:?}: {} x {} = {}",
            from,
            to,
            amount,
            rate,
            formatted
        );
    }

    /// Currently active side
    pub fn active(&self) -> FieldSide {
        self.active
    }

    /// Current text of a field
    pub fn field_text(&self, side: FieldSide) -> &str {
        &self.field(side).text
    }

    /// Current currency of a field
    pub fn field_currency(&self, side: FieldSide) -> Currency {
        self.field(side).currency
    }

    /// Borrow the view (mainly for embedders and tests)
    pub fn view(&self) -> &V {
        &self.view
    }

    fn field(&self, side: FieldSide) -> &FieldState {
        match side {
            FieldSide::Source => &self.source,
            FieldSide::Target => &self.target,
        }
    }

    fn field_mut(&mut self, side: FieldSide) -> &mut FieldState {
        match side {
            FieldSide::Source => &mut self.source,
            FieldSide::Target => &mut self.target,
        }
    }
}
