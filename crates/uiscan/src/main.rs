//! # uiscan
//!
//! CLI for multi-strategy raster UI-element detection.
//!
//! ## Contract
//!
//! - One positional argument: the screenshot image path.
//! - Success: a single JSON object `{"elements": [...], "elapsed_ms": N}` on
//!   stdout, exit code 0.
//! - Failure: a JSON object with an `"error"` field on stderr, exit code 1.
//!
//! Logs go to stderr so stdout stays machine-readable.

use std::path::Path;

use uiscan_core::Error;

fn main() {
    // Initialize logging to stderr; stdout is reserved for the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        fail(&Error::Usage("uiscan <screenshot>".to_string()));
    };

    match uiscan::detect_file(Path::new(&path)) {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(&Error::Serialization(e)),
        },
        Err(e) => fail(&e),
    }
}

/// Report a failure as JSON on stderr and exit with code 1.
fn fail(error: &Error) -> ! {
    eprintln!("{}", uiscan::failure_report(error));
    std::process::exit(1);
}
