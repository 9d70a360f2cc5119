//! Calculator widget demo
//!
//! Clicks through a few calculations on the in-memory page and prints what
//! the display and status line show after each one.
//!
//! Run with: cargo run -p calc-widget --example widget_demo

use calc_widget::prelude::*;
use calc_widget::widget::{parse_sequence, RESULT_ID};

fn run(widget: &mut CalculatorWidget, sequence: &str) {
    let Ok(actions) = parse_sequence(sequence) else {
        println!("  {sequence:<12} (not a key sequence)");
        return;
    };
    for action in actions {
        let _ = widget.press(action);
    }
    let status = widget
        .dom()
        .get_element(RESULT_ID)
        .map(|el| format!("{} [{}]", el.text_content, el.class_name()))
        .unwrap_or_default();
    println!("  {sequence:<12} display={:<12} status={status}", widget.display());
}

fn main() {
    println!("Calculator widget demo");
    println!("──────────────────────");

    let mut widget = CalculatorWidget::new();
    for sequence in ["12+30=", "C0.1+0.2=", "C2+3*4=", "C5/0=", "C3.1.4", "DD"] {
        run(&mut widget, sequence);
    }

    println!();
    println!("Waiting out the error timer...");
    run(&mut widget, "C9/0=");
    widget.advance(WidgetConfig::DEFAULT_ERROR_CLEAR_DELAY_MS);
    println!("  after {} ms: status={:?}", WidgetConfig::DEFAULT_ERROR_CLEAR_DELAY_MS, widget.status());
}
