//! Logging setup keyed on the debug flag

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Install the global tracing subscriber.
///
/// Filters at WARN normally and DEBUG when the debug flag is set, with
/// formatted output directed to stderr. Installation is idempotent so the
/// entry point can be invoked repeatedly in one process.
pub fn setup_logging(debug: bool) {
    let filter = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter);
    let _ = tracing_subscriber::registry().with(filtered_layer).try_init();

    if debug {
        tracing::debug!("Debug mode: debug");
    }
}
