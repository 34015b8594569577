//! Tests for the process-wide default logger
//!
//! The default logger is shared by every test in this binary, so all checks
//! run inside one test in a fixed order.

use leveled_log::prelude::*;
use leveled_log::{global, info, log, warn};

fn panicking_exit(code: i32) -> ! {
    panic!("exit({})", code)
}

#[test]
fn test_default_instance_lifecycle() {
    assert_eq!(global::threshold(), LogLevel::INFO);

    let sink = MemorySink::new();
    global::set_sink(sink.clone());
    global::set_formatter(TextFormatter::new("$L $m", TimestampFormat::layout(""), "\n"));

    global::debug("hidden").unwrap();
    global::info("shown").unwrap();
    global::print("printed").unwrap();
    assert_eq!(sink.lines(), vec!["INFO shown", "INFO printed"]);

    // Setters take effect for the very next call.
    global::set_threshold(LogLevel::DEBUG);
    assert!(global::enabled(LogLevel::DEBUG));
    global::debug("now visible").unwrap();
    assert_eq!(sink.lines().last().map(String::as_str), Some("DEBUG now visible"));

    // Macros without a logger argument go to the default instance.
    sink.clear();
    info!("count={}", 3).unwrap();
    warn!("ratio={:.2}", 0.5).unwrap();
    log!(LogLevel::ERROR, "code {}", 7).unwrap();
    assert_eq!(sink.lines(), vec!["INFO count=3", "WARN ratio=0.50", "ERROR code 7"]);

    // Locations point at the caller.
    sink.clear();
    global::set_formatter(TextFormatter::new("$f", TimestampFormat::layout(""), "\n"));
    let line = line!() + 1;
    global::warn("where").unwrap();
    assert_eq!(sink.contents(), format!("global_tests.rs:{}\n", line));

    // Fatal writes, then runs the exit hook.
    sink.clear();
    global::set_formatter(TextFormatter::new("$l $m", TimestampFormat::layout(""), "\n"));
    global::set_exit_hook(panicking_exit);
    let outcome = std::panic::catch_unwind(|| {
        global::fatal("stop");
    });
    assert!(outcome.is_err());
    assert_eq!(sink.contents(), "[x] stop\n");

    global::reset();
    assert_eq!(global::threshold(), LogLevel::INFO);
}
