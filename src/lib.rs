//! # ratesync
//!
//! Event-driven core for a bidirectional currency conversion widget: two
//! numeric fields, each bound to a selectable currency, kept mutually
//! consistent under a fixed exchange-rate table.
//!
//! The crate is toolkit-agnostic. A UI layer implements [`view::ConverterView`]
//! and forwards user interactions as [`controller::ConverterEvent`]s; the
//! controller propagates each edit one way, from the active field into the
//! other, and can never oscillate.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ratesync::prelude::*;
//!
//! struct Stub;
//! impl ConverterView for Stub {
//!     fn set_field_text(&mut self, _side: FieldSide, _text: &str) {}
//!     fn set_rate_label(&mut self, _text: &str) {}
//! }
//!
//! let table = Arc::new(RateTable::builtin());
//! let mut controller =
//!     ConversionController::new(table, Currency::USD, Currency::EUR, Stub);
//!
//! controller.handle_event(ConverterEvent::TextChanged(
//!     FieldSide::Source,
//!     "100".to_string(),
//! ));
//! assert_eq!(controller.field_text(FieldSide::Target), "92.61");
//! ```

pub mod controller;
pub mod currency;
pub mod error;
pub mod format;
pub mod rates;
pub mod view;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::controller::{ConversionController, ConverterEvent};
    pub use crate::currency::Currency;
    pub use crate::error::{ConverterError, Result};
    pub use crate::format::format_amount;
    pub use crate::rates::RateTable;
    pub use crate::view::{ConverterView, FieldSide};
}
