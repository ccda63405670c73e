//! Fixture loading from YAML files

use std::path::Path;

use serde::Deserialize;

/// A single test case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub desc: String,
    pub input: String,
    /// Strict RFC 5424 limits
    #[serde(default)]
    pub strict: bool,
    /// Octet-counting framing instead of newline delimiting
    #[serde(default)]
    pub octet: bool,
    pub events: Vec<ExpectedEvent>,
    /// `Debug` form of the expected `ErrorKind`
    #[serde(default)]
    pub error: Option<String>,
}

/// Expected event - either a bare name or [name, args...]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpectedEvent {
    /// Event with no content (Begin, Complete)
    Bare(String),
    /// Content event [Name, "arg", ...]
    WithContent(Vec<String>),
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
