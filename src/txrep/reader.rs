//! Forward cursor over TxRep lines
//!
//! Lines are consumed strictly in order. Each read names the path it expects,
//! and a mismatch is reported against that path. Values are the first token
//! after the colon: either a JSON-quoted string or everything up to the first
//! whitespace. Anything after the token (typically a `(...)` comment) is ignored.

use crate::error::WasmStellarError;
use std::str::FromStr;

use super::writer::child;

#[derive(Debug)]
struct Entry {
    line: usize,
    path: String,
    value: String,
}

#[derive(Debug)]
pub struct TxRepReader {
    entries: Vec<Entry>,
    pos: usize,
}

impl TxRepReader {
    pub fn parse(text: &str) -> Result<Self, WasmStellarError> {
        let mut entries = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let (path, value) = trimmed.split_once(':').ok_or_else(|| {
                WasmStellarError::txrep(trimmed, format!("line {} has no ':' separator", i + 1))
            })?;
            entries.push(Entry {
                line: i + 1,
                path: path.trim().to_string(),
                value: value.trim().to_string(),
            });
        }
        Ok(TxRepReader { entries, pos: 0 })
    }

    pub fn line_count(&self) -> usize {
        self.entries.len()
    }

    /// Path of the next unread line
    pub fn peek_path(&self) -> Option<&str> {
        self.entries.get(self.pos).map(|e| e.path.as_str())
    }

    /// Fails if any line is left unread
    pub fn finish(&self) -> Result<(), WasmStellarError> {
        match self.entries.get(self.pos) {
            None => Ok(()),
            Some(entry) => Err(WasmStellarError::txrep(
                &entry.path,
                format!("unexpected line {}", entry.line),
            )),
        }
    }

    /// Value token of the next line, which must be at `path`
    pub fn value(&mut self, path: &str) -> Result<String, WasmStellarError> {
        let entry = self
            .entries
            .get(self.pos)
            .ok_or_else(|| WasmStellarError::txrep(path, "missing line"))?;
        if entry.path != path {
            return Err(WasmStellarError::txrep(
                path,
                format!("expected this path at line {}, found '{}'", entry.line, entry.path),
            ));
        }
        let token = first_token(&entry.value);
        if token.is_empty() {
            return Err(WasmStellarError::txrep(path, "missing value"));
        }
        self.pos += 1;
        Ok(token.to_string())
    }

    pub fn number<T: FromStr>(&mut self, path: &str) -> Result<T, WasmStellarError> {
        let value = self.value(path)?;
        value
            .parse()
            .map_err(|_| WasmStellarError::txrep(path, format!("invalid number '{}'", value)))
    }

    pub fn bool(&mut self, path: &str) -> Result<bool, WasmStellarError> {
        match self.value(path)?.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(WasmStellarError::txrep(
                path,
                format!("invalid boolean '{}'", other),
            )),
        }
    }

    /// `<path>._present`
    pub fn present(&mut self, path: &str) -> Result<bool, WasmStellarError> {
        self.bool(&child(path, "_present"))
    }

    /// `<path>.len`, bounded by `max`
    pub fn len(&mut self, path: &str, max: u32) -> Result<usize, WasmStellarError> {
        let len_path = child(path, "len");
        let len: u32 = self.number(&len_path)?;
        if len > max {
            return Err(WasmStellarError::txrep(
                &len_path,
                format!("length {} exceeds maximum {}", len, max),
            ));
        }
        Ok(len as usize)
    }

    pub fn hex(&mut self, path: &str) -> Result<Vec<u8>, WasmStellarError> {
        let value = self.value(path)?;
        if value == "\"\"" {
            return Ok(Vec::new());
        }
        hex::decode(&value)
            .map_err(|e| WasmStellarError::txrep(path, format!("invalid hex: {}", e)))
    }

    pub fn hex_fixed<const N: usize>(&mut self, path: &str) -> Result<[u8; N], WasmStellarError> {
        let bytes = self.hex(path)?;
        bytes.try_into().map_err(|bytes: Vec<u8>| {
            WasmStellarError::txrep(path, format!("expected {} bytes, got {}", N, bytes.len()))
        })
    }

    /// Quoted JSON string, or a bare single-word token taken verbatim.
    ///
    /// A bare token may only be followed by a `(...)` comment; any other trailing
    /// text means the string was meant to be quoted.
    pub fn string(&mut self, path: &str) -> Result<String, WasmStellarError> {
        let raw = self.entries.get(self.pos).map(|e| e.value.clone());
        let value = self.value(path)?;
        if value.starts_with('"') {
            return serde_json::from_str(&value)
                .map_err(|e| WasmStellarError::txrep(path, format!("invalid string: {}", e)));
        }
        let rest = raw.as_deref().unwrap_or("")[value.len()..].trim_start();
        if !rest.is_empty() && !rest.starts_with('(') {
            return Err(WasmStellarError::txrep(
                path,
                "unquoted string has trailing text",
            ));
        }
        Ok(value)
    }

    /// Parse the value with a name lookup such as `OperationType::from_name`
    pub fn named<T>(
        &mut self,
        path: &str,
        from_name: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, WasmStellarError> {
        let value = self.value(path)?;
        from_name(&value)
            .ok_or_else(|| WasmStellarError::txrep(path, format!("unknown value '{}'", value)))
    }

    /// Parse the value with a fallible constructor, attaching the path to its error
    pub fn parsed<T>(
        &mut self,
        path: &str,
        parse: impl FnOnce(&str) -> Result<T, WasmStellarError>,
    ) -> Result<T, WasmStellarError> {
        let value = self.value(path)?;
        parse(&value).map_err(|e| WasmStellarError::txrep(path, e.to_string()))
    }
}

/// A JSON-quoted string including its quotes, or the text up to the first whitespace
fn first_token(value: &str) -> &str {
    if value.starts_with('"') {
        let mut escaped = false;
        for (i, c) in value.char_indices().skip(1) {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => return &value[..=i],
                _ => {}
            }
        }
        value
    } else {
        value.split_whitespace().next().unwrap_or("")
    }
}
