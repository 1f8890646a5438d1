use portal_core::model::ViewId;
use url::Url;

/// History of address fragments with a cursor, as a browser keeps it.
///
/// The fragment is written by the router but may also be changed from outside
/// (back/forward, embedding frameworks), so callers must never assume it
/// matches the visible view.
#[derive(Debug, Clone)]
pub struct AddressBar {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBar {
    /// A history with a single entry and no fragment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
            cursor: 0,
        }
    }

    /// A history whose only entry carries `fragment` (e.g. a deep link).
    #[must_use]
    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        Self {
            entries: vec![fragment.into()],
            cursor: 0,
        }
    }

    /// The current fragment without the leading `#`, or `None` when empty.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        let current = self.entries[self.cursor].as_str();
        (!current.is_empty()).then_some(current)
    }

    /// Number of entries in the back/forward stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Navigate to `id`, creating a history entry. Assigning the fragment
    /// that is already current does not navigate.
    pub fn push(&mut self, id: &ViewId) {
        if self.entries[self.cursor] == id.as_str() {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(id.as_str().to_owned());
        self.cursor += 1;
    }

    /// Clear the fragment in place without creating a history entry.
    pub fn clear_in_place(&mut self) {
        self.entries[self.cursor].clear();
    }

    /// Rewrite the current entry the way an embedding framework would,
    /// bypassing the router.
    pub fn set_external(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        self.entries[self.cursor] = fragment.trim_start_matches('#').to_owned();
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// `base` with the current fragment applied.
    #[must_use]
    pub fn href(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_fragment(self.fragment());
        url
    }
}
