//! Tests for CLI output formatting helpers
//!
//! - Duration formatting (ms, s, m)
//! - Color helpers (respects NO_COLOR)

use sift::cli::output::{colors, format_duration};

#[test]
fn test_format_duration_various() {
    assert_eq!(format_duration(0.001), "1ms");
    assert_eq!(format_duration(0.999), "999ms");
    assert_eq!(format_duration(1.0), "1.00s");
    assert_eq!(format_duration(59.99), "59.99s");
    assert_eq!(format_duration(60.0), "1m 0.0s");
    assert_eq!(format_duration(125.5), "2m 5.5s");
}

#[test]
fn test_colors_disabled() {
    colored::control::set_override(false);

    assert_eq!(colors::label("Configuration").to_string(), "Configuration");
    assert_eq!(colors::doc_id("D1").to_string(), "D1");
    assert_eq!(colors::number("42").to_string(), "42");
    assert_eq!(colors::file_path("/tmp/corpus").to_string(), "/tmp/corpus");

    colored::control::unset_override();
}
