//! Ignored user messages: exact (post-trim) matches against a configured list.

use crate::turn::ROLE_USER;

/// Whether a message should be suppressed by the caller.
///
/// Only roles equal to `"user"` (any case) are eligible. Content and every list entry are
/// trimmed, then compared exactly and case-sensitively. An empty list never matches.
#[must_use]
pub fn is_ignored_user_message<S: AsRef<str>>(
    role: &str,
    content: &str,
    ignore_list: &[S],
) -> bool {
    if !role.eq_ignore_ascii_case(ROLE_USER) {
        return false;
    }
    let trimmed = trim_blank(content);
    ignore_list
        .iter()
        .any(|entry| trim_blank(entry.as_ref()) == trimmed)
}

/// Strip Unicode whitespace plus the ASCII separators U+001C..=U+001F.
fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Read-only provider of the ignore list (settings snapshot, fixed list, ...).
pub trait IgnoreListSource {
    /// Current ignore list. Queried on every [`IgnoreListSource::is_ignored`] call.
    fn ignored_user_messages(&self) -> &[String];

    /// [`is_ignored_user_message`] against this source's list.
    fn is_ignored(&self, role: &str, content: &str) -> bool {
        is_ignored_user_message(role, content, self.ignored_user_messages())
    }
}

impl IgnoreListSource for [String] {
    fn ignored_user_messages(&self) -> &[String] {
        self
    }
}

impl IgnoreListSource for Vec<String> {
    fn ignored_user_messages(&self) -> &[String] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_match_is_case_insensitive() {
        assert!(is_ignored_user_message("User", "ok", &["ok"]));
        assert!(is_ignored_user_message("uSeR", "ok", &["ok"]));
        assert!(!is_ignored_user_message("users", "ok", &["ok"]));
    }

    #[test]
    fn content_match_is_case_sensitive() {
        assert!(!is_ignored_user_message("user", "OK", &["ok"]));
    }

    #[test]
    fn entries_are_trimmed() {
        assert!(is_ignored_user_message("user", "continue", &["\tcontinue \n"]));
    }

    #[test]
    fn ascii_separators_are_trimmed() {
        assert_eq!(trim_blank("\u{1c}\u{1d} hi\u{1e}\u{1f}"), "hi");
        assert!(is_ignored_user_message("user", "hi\u{1f}", &["hi"]));
        assert!(is_ignored_user_message("user", "hi", &["\u{1c}hi"]));
        assert!(!is_ignored_user_message("user", "h\u{1f}i", &["hi"]));
    }

    #[test]
    fn blank_content_matches_blank_entry() {
        assert!(is_ignored_user_message("user", "   ", &["  "]));
        assert!(!is_ignored_user_message("user", "   ", &["x"]));
    }

    #[test]
    fn vec_source_queries_its_list() {
        let list = vec!["继续".to_string(), "go on".to_string()];
        assert!(list.is_ignored("user", " go on "));
        assert!(!list.is_ignored("system", "go on"));
    }
}
