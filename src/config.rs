use serde::{Deserialize, Serialize};

/// Options controlling how a tree is serialized.
///
/// The default configuration reproduces the lenient behaviour: children that
/// are neither nodes nor strings are dropped, one-shot producers that were
/// already consumed render nothing, and class names are written verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Reject unsupported children and exhausted one-shot producers instead of
  /// skipping them.
  pub strict: bool,
  /// Escape class values like any other attribute value.
  pub escape_class: bool,
}

impl Config {
  pub fn strict() -> Self {
    Config {
      strict: true,
      ..Default::default()
    }
  }
}
