//! Console walkthrough of the conversion widget core
//!
//! Simulates the event stream a toolkit adapter would deliver and prints the
//! writes the controller pushes back. Run with:
//! `cargo run --example console_converter`

use ratesync::prelude::*;
use std::sync::Arc;

/// Prints every controller write, standing in for real widgets
struct ConsoleView;

impl ConverterView for ConsoleView {
    fn set_field_text(&mut self, side: FieldSide, text: &str) {
        println!("  [{:?} field] <- {}", side, text);
    }

    fn set_rate_label(&mut self, text: &str) {
        println!("  [rate label] <- {}", text);
    }

    fn set_emphasis(&mut self, side: FieldSide) {
        println!("  [emphasis]   -> {:?}", side);
    }
}

fn main() {
    env_logger::init();

    println!("=== ratesync: console converter demo ===\n");

    let table = Arc::new(RateTable::builtin());
    let mut controller =
        ConversionController::new(table, Currency::USD, Currency::EUR, ConsoleView);

    println!("User types 100 into the source (USD) field:");
    controller.handle_event(ConverterEvent::TextChanged(
        FieldSide::Source,
        "100".to_string(),
    ));

    println!("\nUser switches the target selector to VND:");
    controller.handle_event(ConverterEvent::CurrencyChanged(
        FieldSide::Target,
        Currency::VND,
    ));

    println!("\nUser focuses the target field and types 50000:");
    controller.handle_event(ConverterEvent::FocusGained(FieldSide::Target));
    controller.handle_event(ConverterEvent::TextChanged(
        FieldSide::Target,
        "50000".to_string(),
    ));

    println!("\nUser clears the target field:");
    controller.handle_event(ConverterEvent::TextChanged(
        FieldSide::Target,
        String::new(),
    ));

    println!(
        "\nFinal state: source=\"{}\" ({}), target=\"{}\" ({})",
        controller.field_text(FieldSide::Source),
        controller.field_currency(FieldSide::Source),
        controller.field_text(FieldSide::Target),
        controller.field_currency(FieldSide::Target),
    );
}
