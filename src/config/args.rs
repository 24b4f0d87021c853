//! Command line argument parsing.
//!
//! # Responsibilities
//! - Collect `--key=value` tokens into a flat string map
//! - Silently ignore everything else (pass-through friendly)
//! - Last occurrence of a key wins
//!
//! # Design Decisions
//! - Keys are not validated against a known set here; consumers look up
//!   what they care about and ignore the rest
//! - Flags (`gui`, `withssl`) are presence-only: any value sets them

use std::collections::HashMap;

/// Parsed command line arguments.
///
/// A thin wrapper over the raw key/value map so consumers get typed
/// accessors instead of string plumbing.
#[derive(Debug, Clone, Default)]
pub struct ArgMap {
    values: HashMap<String, String>,
}

impl ArgMap {
    /// Get the raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Presence check, used for flag-style keys.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Parse a port value. Malformed numbers are reported and treated as
    /// absent so the caller's default survives.
    pub fn get_port(&self, key: &str) -> Option<u16> {
        let raw = self.get(key)?;
        match raw.parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                tracing::warn!(key, value = raw, "Ignoring malformed port value");
                None
            }
        }
    }

    /// Number of recognized key/value pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no `--key=value` tokens were recognized.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse command line tokens into an [`ArgMap`].
///
/// Only tokens of the exact shape `--key=value` are recognized; the key and
/// value must both be non-empty. Anything else is ignored without comment.
pub fn parse_arguments<I, S>(tokens: I) -> ArgMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = HashMap::new();

    for token in tokens {
        let token = token.as_ref();
        let Some(rest) = token.strip_prefix("--") else {
            continue;
        };
        let Some((key, value)) = rest.split_once('=') else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        values.insert(key.to_string(), value.to_string());
    }

    ArgMap { values }
}
