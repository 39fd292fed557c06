//! Active-section tracking for the navigation bar.
//!
//! Sections are observed against a band in the middle of the viewport. Each
//! intersecting section clears every link and re-marks the one pointing at
//! it, so inside a single observer batch the last intersecting entry decides.

/// One observer notification, reduced to what the tracker needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry<'a> {
    pub id: &'a str,
    pub is_intersecting: bool,
}

impl<'a> SectionEntry<'a> {
    #[must_use]
    pub const fn new(id: &'a str, is_intersecting: bool) -> Self {
        Self {
            id,
            is_intersecting,
        }
    }
}

/// Whether a nav link `href` points at the section with `section_id`.
#[must_use]
pub fn link_matches(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|h| h.strip_prefix('#'))
        .is_some_and(|target| !target.is_empty() && target == section_id)
}

#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    current: Option<String>,
}

impl SectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Section whose link is currently marked.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Process one observer batch in delivery order.
    ///
    /// Returns the section id whose link should be active when the batch
    /// changed the highlight. Batches with no intersecting entry leave the
    /// current highlight untouched and return `None`.
    pub fn observe_batch<'a, I>(&mut self, entries: I) -> Option<&str>
    where
        I: IntoIterator<Item = SectionEntry<'a>>,
    {
        let last = entries
            .into_iter()
            .filter(|entry| entry.is_intersecting)
            .last()?;
        self.current = Some(last.id.to_string());
        self.current.as_deref()
    }
}
