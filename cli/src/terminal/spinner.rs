use tracing::{info_span, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_indicatif::style::ProgressStyle;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// A span rendered as a spinner while it is entered.
///
/// Instrument the awaited work with it; the spinner clears when the span closes.
pub fn spinner_span(message: &str) -> Span {
    let span = info_span!("spinner");
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS);

    span.pb_set_style(&style);
    span.pb_set_message(message);
    span
}
