//! Pluggable secret lookup.
//!
//! Model credentials can come from the process environment, a secret store,
//! or fixed test values. [`SecretSource`] is the seam: configuration code
//! asks a source for named values and never reaches into globals itself,
//! which makes "endpoint not configured" trivially testable.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// SecretSource trait
// ---------------------------------------------------------------------------

/// A named-value lookup for credentials and endpoints.
///
/// `get` returns `None` for unknown names and for present-but-empty values,
/// so callers can treat "unset" and "set to nothing" identically.
pub trait SecretSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

// ---------------------------------------------------------------------------
// EnvSource
// ---------------------------------------------------------------------------

/// Reads secrets from process environment variables.
#[derive(Debug, Default)]
pub struct EnvSource;

impl EnvSource {
    pub fn new() -> Self {
        Self
    }
}

impl SecretSource for EnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// StaticSource
// ---------------------------------------------------------------------------

/// A fixed in-memory secret map — test fixtures and embedded deployments.
#[derive(Debug, Default)]
pub struct StaticSource {
    values: HashMap<String, String>,
}

impl StaticSource {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Build from `(name, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl SecretSource for StaticSource {
    fn get(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }
}

// ---------------------------------------------------------------------------
// ChainSource
// ---------------------------------------------------------------------------

/// Tries each source in order; the first hit wins.
///
/// The standard deployment shape is environment variables first, then a
/// secret store:
///
/// ```rust
/// use quiz_grader::config::{ChainSource, EnvSource, SecretSource, StaticSource};
///
/// let vault = StaticSource::from_pairs(&[("OPENAI_API_KEY", "sk-from-vault")]);
/// let chain = ChainSource::new(vec![Box::new(EnvSource::new()), Box::new(vault)]);
/// assert!(chain.get("OPENAI_API_KEY").is_some());
/// ```
pub struct ChainSource {
    sources: Vec<Box<dyn SecretSource>>,
}

impl ChainSource {
    pub fn new(sources: Vec<Box<dyn SecretSource>>) -> Self {
        Self { sources }
    }
}

impl SecretSource for ChainSource {
    fn get(&self, name: &str) -> Option<String> {
        self.sources.iter().find_map(|source| source.get(name))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
