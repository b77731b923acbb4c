use crate::gtfs_rt::TranslatedString;

impl TranslatedString {
    /// Picks the display text for `preferred_language`.
    ///
    /// The first translation tagged with that language and carrying a
    /// non-empty text wins. Failing that, the first translation in the list is
    /// used whatever its language; an empty list gives `""`.
    pub fn select(&self, preferred_language: &str) -> &str {
        self.translation
            .iter()
            .find(|t| t.language.as_deref() == Some(preferred_language) && !t.text.is_empty())
            .or_else(|| self.translation.first())
            .map(|t| t.text.as_str())
            .unwrap_or_default()
    }
}

/// [`TranslatedString::select`] over an optional field.
pub(crate) fn select_text(text: Option<&TranslatedString>, preferred_language: &str) -> String {
    text.map(|t| t.select(preferred_language))
        .unwrap_or_default()
        .to_string()
}
