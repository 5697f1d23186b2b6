//! spice demo entry point.
//!
//! Prints the outcome of the `Maybe` and `TryCatch` demo pipelines. Set
//! `RUST_LOG` to control the library's `tracing` output.

use spice_demo::{demo_maybe, demo_try_catch, maybe_report, try_catch_report};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,spice=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Running spice demo pipelines");

    println!("{}", maybe_report(demo_maybe()));
    println!("{}", try_catch_report(demo_try_catch()));
}
