//! History settings snapshot.
//!
//! Parsed from the `history` section of the runtime settings YAML. Callers own file
//! discovery and layering; this type only parses a document and overlays two snapshots,
//! user over system.

use serde::Deserialize;

use crate::error::HistoryResult;
use crate::ignore::IgnoreListSource;

/// Read-only history configuration; supplies the ignore list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistorySettings {
    /// User messages suppressed by the chat client (compared after trimming).
    pub ignored_user_messages: Option<Vec<String>>,
}

impl HistorySettings {
    /// Snapshot with an explicit ignore list.
    #[must_use]
    pub fn with_ignored_user_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_user_messages: Some(messages.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse a settings document. An empty document yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HistoryError::InvalidSettings`] when `raw` is not valid YAML for
    /// this shape.
    pub fn from_yaml_str(raw: &str) -> HistoryResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Parse a settings document, falling back to defaults on error.
    #[must_use]
    pub fn parse_or_default(raw: &str, origin: &str) -> Self {
        match Self::from_yaml_str(raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    origin,
                    error = %error,
                    "failed to parse history settings yaml; using defaults"
                );
                Self::default()
            }
        }
    }

    /// Overlay `overlay` on top of `self`; set fields in the overlay win.
    #[must_use]
    pub fn merge(self, overlay: Self) -> Self {
        Self {
            ignored_user_messages: overlay.ignored_user_messages.or(self.ignored_user_messages),
        }
    }
}

impl IgnoreListSource for HistorySettings {
    fn ignored_user_messages(&self) -> &[String] {
        self.ignored_user_messages.as_deref().unwrap_or(&[])
    }
}
