/// Source of the platform's dark-mode preference.
pub trait SystemPreference {
    /// `None` when the platform cannot answer.
    fn prefers_dark(&self) -> Option<bool>;
}

/// `window.matchMedia(query)`, read once. No change listener is kept.
pub struct MediaQuery {
    query: &'static str,
}

impl MediaQuery {
    pub fn new(query: &'static str) -> Self {
        Self { query }
    }
}

impl SystemPreference for MediaQuery {
    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media(self.query)
            .ok()
            .flatten()
            .map(|list| list.matches())
    }
}
