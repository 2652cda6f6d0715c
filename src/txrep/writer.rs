//! Line emitter for TxRep output

use crate::error::WasmStellarError;
use std::fmt::Display;

/// Join a parent path and a field name; an empty parent yields the bare name
pub(crate) fn child(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Path of the `i`-th element of an array field
pub(crate) fn index(prefix: &str, i: usize) -> String {
    format!("{}[{}]", prefix, i)
}

#[derive(Debug, Default)]
pub struct TxRepWriter {
    out: String,
    lines: usize,
    error: Option<WasmStellarError>,
}

impl TxRepWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// The rendered text, or the first value that has no TxRep form
    pub fn finish(self) -> Result<String, WasmStellarError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.out),
        }
    }

    /// Record a value at `path` that cannot be rendered; the first one wins
    pub fn fail(&mut self, path: &str, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(WasmStellarError::txrep(path, message));
        }
    }

    pub fn line(&mut self, path: &str, value: impl Display) {
        self.out.push_str(path);
        self.out.push_str(": ");
        self.out.push_str(&value.to_string());
        self.out.push('\n');
        self.lines += 1;
    }

    pub fn present(&mut self, path: &str, present: bool) {
        self.line(&child(path, "_present"), present);
    }

    pub fn len(&mut self, path: &str, len: usize) {
        self.line(&child(path, "len"), len);
    }

    /// Lowercase hex; an empty blob is written as `""`
    pub fn hex(&mut self, path: &str, bytes: &[u8]) {
        if bytes.is_empty() {
            self.line(path, "\"\"");
        } else {
            self.line(path, hex::encode(bytes));
        }
    }

    /// JSON-quoted string
    pub fn string(&mut self, path: &str, value: &str) {
        self.line(path, quote(value));
    }

    /// Symbol; bare when it is a plain identifier
    pub fn symbol(&mut self, path: &str, value: &str) {
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            self.line(path, value);
        } else {
            self.line(path, quote(value));
        }
    }

    /// Stroop amount with its decimal form as a comment
    pub fn amount(&mut self, path: &str, stroops: i64) {
        self.line(path, format!("{} ({})", stroops, amount_comment(stroops)));
    }

    /// Unix time with a UTC timestamp comment; zero stays bare
    pub fn time(&mut self, path: &str, secs: u64) {
        match time_comment(secs) {
            Some(comment) => self.line(path, format!("{} ({})", secs, comment)),
            None => self.line(path, secs),
        }
    }
}

fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

/// `400004000` -> `40.0004e7`
fn amount_comment(stroops: i64) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    let abs = stroops.unsigned_abs();
    let whole = abs / 10_000_000;
    let frac = abs % 10_000_000;
    if frac == 0 {
        format!("{}{}e7", sign, whole)
    } else {
        let digits = format!("{:07}", frac);
        format!("{}{}.{}e7", sign, whole, digits.trim_end_matches('0'))
    }
}

fn time_comment(secs: u64) -> Option<String> {
    if secs == 0 {
        return None;
    }
    let secs = i64::try_from(secs).ok()?;
    let time = chrono::DateTime::from_timestamp(secs, 0)?;
    Some(time.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}
