//! Fixed table of hand-written sample literals.
//!
//! These are the kind of strings that show up in scripts and programs:
//! keywords, log levels, paths, URLs, JSON and SQL fragments, non-ASCII text,
//! and text carrying escape sequences. The `\n` and `\t` in the last two
//! entries are a backslash followed by a letter, not control characters.

use rand::Rng;

/// The sample literal table. Order is fixed.
pub const SAMPLE_LITERALS: &[&str] = &[
    "Hello, world!",
    "error: file not found",
    "ok",
    "true",
    "false",
    "null",
    "NaN",
    "Infinity",
    "admin",
    "user",
    "password123",
    "debug",
    "info",
    "warning",
    "critical",
    "session expired",
    "connection reset",
    "/usr/local/bin",
    r"C:\Program Files\App",
    "tmp/file.log",
    "config.json",
    "settings.ini",
    "https://example.com",
    "http://localhost:8080",
    "127.0.0.1",
    "0.0.0.0",
    "<html><body>Test</body></html>",
    r#"{"status": "ok"}"#,
    "[1,2,3]",
    "SELECT * FROM users;",
    "INSERT INTO logs VALUES (1, 'ok');",
    "π = 3.14159",
    "Δx = 0.001",
    "😀 😎 👍",
    "token=abc123",
    "uuid=550e8400-e29b-41d4-a716-446655440000",
    "2025-08-24",
    r"line one\nline two",
    r"tab\tseparated",
];

/// Pick one sample uniformly, with replacement.
pub fn pick_sample<R: Rng>(rng: &mut R) -> String {
    let idx = rng.random_range(0..SAMPLE_LITERALS.len());
    SAMPLE_LITERALS[idx].to_string()
}

/// Whether `value` is one of the sample literals.
pub fn is_sample(value: &str) -> bool {
    SAMPLE_LITERALS.contains(&value)
}
