// Java-style .properties parsing and atomic rewriting

use crate::utils::error::{RelverError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// An ordered key-value store over the flat `.properties` text format.
///
/// Entry order from the source file is preserved, so rewriting a single key
/// leaves the rest of the file intact (load-merge-write). Parsing follows
/// the JDK loosely: `#` and `!` start comments, the first unescaped `=` or
/// `:` separates key from value, and a line with no separator is a key with
/// an empty value. Line continuations and `\uXXXX` escapes are not
/// supported; files are read and written as UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from text. Never fails: malformed escape sequences
    /// degrade to the escaped character, matching the JDK's tolerance.
    pub fn parse(input: &str) -> Self {
        let mut entries = Vec::new();

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            entries.push(parse_line(line));
        }

        Self { entries }
    }

    /// Load and parse the properties file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RelverError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    /// Value for `key`, if present. First occurrence wins on lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`, replacing it in place if present (preserving
    /// its position in the file) or appending it otherwise.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize to `key=value` lines in entry order.
    pub fn serialize(&self) -> String {
        let mut output = String::new();
        for (key, value) in &self.entries {
            output.push_str(&escape_key(key));
            output.push('=');
            output.push_str(&escape_value(value));
            output.push('\n');
        }
        output
    }

    /// Write the store to `path`, replacing any existing file.
    ///
    /// The content goes to a temporary file in the same directory first and
    /// is then renamed over the target, so a failed write leaves the prior
    /// file content unchanged.
    pub fn store(&self, path: &Path) -> Result<()> {
        let write_err = |reason: String| RelverError::Write {
            path: path.to_path_buf(),
            reason,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(e.to_string()))?;
        tmp.write_all(self.serialize().as_bytes())
            .map_err(|e| write_err(e.to_string()))?;
        tmp.persist(path).map_err(|e| write_err(e.to_string()))?;
        Ok(())
    }
}

/// Split one non-comment line into key and value at the first unescaped
/// `=` or `:`.
fn parse_line(line: &str) -> (String, String) {
    let mut key = String::new();
    let mut chars = line.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    key.push(unescape_char(escaped));
                }
            }
            '=' | ':' => {
                let value = &line[i + c.len_utf8()..];
                return (
                    key.trim_end().to_string(),
                    unescape(value.trim_start()),
                );
            }
            _ => key.push(c),
        }
    }

    // No separator: whole line is the key, value is empty (JDK behavior)
    (key.trim_end().to_string(), String::new())
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(unescape_char(escaped));
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn unescape_char(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

fn escape_key(s: &str) -> String {
    escape(s, true)
}

fn escape_value(s: &str) -> String {
    escape(s, false)
}

fn escape(s: &str, escape_separators: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '=' | ':' | ' ' | '#' | '!' if escape_separators => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
