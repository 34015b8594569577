//! Basic logger usage example
//!
//! Demonstrates a colorized console logger, a fan-out logger and the
//! process-wide default logger.
//!
//! Run with: cargo run --example basic_usage

use leveled_log::prelude::*;
use leveled_log::{global, info, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Leveled Log - Basic Usage Example ===\n");

    // Colorized console logger showing the caller location
    let console = SinkLogger::builder()
        .threshold(LogLevel::DEBUG)
        .formatter(ColorFormatter::new(
            TextFormatter::default().with_template("$l [$t] $f :: $m"),
            Color::White,
        ))
        .sink(ConsoleSink::stdout())
        .build();

    println!("1. Logging at different levels:");
    console.debug("This is a debug message")?;
    console.info("This is an info message")?;
    console.warn("This is a warning message")?;
    console.error("This is an error message")?;

    println!("\n2. Fan-out: everything to stdout, errors also to stderr:");
    let fanout = FanoutLogger::new(LogLevel::INFO)
        .with(Arc::new(console))
        .with(Arc::new(
            SinkLogger::builder()
                .threshold(LogLevel::ERROR)
                .formatter(TextFormatter::default().with_template("$L $F :: $m"))
                .sink(ConsoleSink::stderr())
                .build(),
        ));
    fanout.debug("Debug message (hidden by the fan-out threshold)")?;
    info!(fanout, "Processed {} requests", 128)?;
    warn!(fanout, "Cache hit rate {:.1}%", 42.5)?;
    fanout.error("Upstream unavailable")?;

    println!("\n3. Default logger:");
    global::info("Default logger, default format")?;
    global::set_threshold(LogLevel::WARN);
    global::info("Info message (hidden)")?;
    global::set_formatter(ColorFormatter::default());
    warn!("Default logger reconfigured, attempt {}", 2)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
