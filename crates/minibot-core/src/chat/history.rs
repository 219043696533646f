//! Sidebar title derivation for chat history entries.

/// Number of leading characters of the user message kept in a title.
pub const TITLE_MAX_CHARS: usize = 30;

/// Suffix appended to every title.
pub const TITLE_SUFFIX: &str = "...";

/// Build a history title: the first 30 characters of `message` followed by
/// `"..."`.
///
/// The suffix is appended even when nothing was cut, so `"hi"` becomes
/// `"hi..."`. Clients rely on that shape. Truncation counts Unicode scalar
/// values, never splitting a multi-byte character.
pub fn history_title(message: &str) -> String {
    let mut title: String = message.chars().take(TITLE_MAX_CHARS).collect();
    title.push_str(TITLE_SUFFIX);
    title
}
