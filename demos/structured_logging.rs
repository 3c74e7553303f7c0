//! Hand a chain to a `tracing` subscriber as one structured event.
//!
//! Run with: cargo run --example structured_logging --features tracing

use error_weave::prelude::*;

fn main() {
    tracing_subscriber::fmt().init();

    let err = join!(
        Error::new("payment declined"),
        "card expired",
        Error::value("order_id", 4242),
    );

    // One event with `stacktrace` and `values` fields plus the compact
    // message, the same shape a JSON log sink would receive.
    err.emit();
}
