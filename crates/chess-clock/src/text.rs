//! Normalized game record text.

/// The content of a game record, lowercased with line breaks collapsed
/// into spaces so that every marker can be found with a plain substring
/// search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameText(String);

impl GameText {
    /// Normalizes raw file content.
    pub fn normalize(raw: &str) -> Self {
        let collapsed = raw.replace("\r\n", " ").replace(['\n', '\r'], " ");
        GameText(collapsed.to_lowercase())
    }

    /// Returns the normalized text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GameText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
