//! Active-section tracking for the single page nav.
//!
//! The tracker itself knows nothing about the DOM. Visibility changes come in
//! as [`Observation`]s and scroll commands go out through a [`PageHost`], so
//! the same logic runs against the browser or a test double.

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// A non-empty list of sections with unique ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionList {
    sections: &'static [Section],
}

impl SectionList {
    pub fn new(sections: &'static [Section]) -> Result<Self, SiteError> {
        if sections.is_empty() {
            return Err(SiteError::EmptySections);
        }
        for (i, section) in sections.iter().enumerate() {
            if sections[..i].iter().any(|s| s.id == section.id) {
                return Err(SiteError::DuplicateSection(section.id));
            }
        }
        Ok(Self { sections })
    }

    pub fn first(&self) -> &'static Section {
        &self.sections[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Section> {
        self.sections.iter()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&'static Section> {
        self.sections.get(index)
    }
}

/// Read-only geometry queries and fire-and-forget scroll commands.
pub trait PageHost {
    /// Top edge of the anchor element in document coordinates, `None` if the
    /// page has no element with that id.
    fn element_top(&self, id: &str) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);
}

/// One visibility report for an anchor element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation<'a> {
    pub id: &'a str,
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub struct SectionTracker {
    sections: SectionList,
    active: usize,
    threshold: f64,
    header_offset: f64,
    mounted: bool,
}

impl SectionTracker {
    pub fn new(sections: SectionList, threshold: f64, header_offset: f64) -> Self {
        Self {
            sections,
            active: 0,
            threshold,
            header_offset,
            mounted: true,
        }
    }

    pub fn active(&self) -> &'static str {
        self.sections
            .get(self.active)
            .map(|s| s.id)
            .unwrap_or(self.sections.first().id)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Applies one visibility report. Returns `true` if the active section
    /// changed.
    pub fn observe(&mut self, observation: Observation<'_>) -> bool {
        if !self.mounted || !observation.is_intersecting {
            return false;
        }
        if observation.ratio < self.threshold {
            return false;
        }
        match self.sections.position(observation.id) {
            Some(index) => self.set_active(index),
            None => false,
        }
    }

    /// Applies a batch of reports in delivery order; the last qualifying one
    /// wins.
    pub fn observe_all<'a, I>(&mut self, observations: I) -> bool
    where
        I: IntoIterator<Item = Observation<'a>>,
    {
        let before = self.active;
        for observation in observations {
            self.observe(observation);
        }
        self.active != before
    }

    /// Scrolls to `id` and marks it active without waiting for the observer.
    ///
    /// Unknown ids and ids with no element on the page are ignored. Returns the
    /// scroll offset that was requested.
    pub fn navigate_to<H: PageHost + ?Sized>(&mut self, id: &str, host: &H) -> Option<f64> {
        if !self.mounted {
            return None;
        }
        let top = host.element_top(id)?;
        let index = self.sections.position(id)?;
        let destination = (top - self.header_offset).max(0.0);
        self.set_active(index);
        host.smooth_scroll_to(destination);
        Some(destination)
    }

    /// Stops all further state changes. Late callbacks become no-ops.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Re-arms a tracker whose owner mounted again with the same state.
    pub fn remount(&mut self) {
        self.mounted = true;
    }

    fn set_active(&mut self, index: usize) -> bool {
        let changed = self.active != index;
        self.active = index;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const SECTIONS: &[Section] = &[
        Section { id: "home", label: "Home" },
        Section { id: "services", label: "Services" },
        Section { id: "about", label: "About" },
        Section { id: "contact", label: "Contact" },
    ];

    #[derive(Default)]
    struct FakeHost {
        tops: HashMap<&'static str, f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakeHost {
        fn with(tops: &[(&'static str, f64)]) -> Self {
            Self {
                tops: tops.iter().copied().collect(),
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageHost for FakeHost {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    fn tracker() -> SectionTracker {
        SectionTracker::new(SectionList::new(SECTIONS).unwrap(), 0.4, 80.0)
    }

    fn seen(id: &str, ratio: f64) -> Observation<'_> {
        Observation {
            id,
            is_intersecting: true,
            ratio,
        }
    }

    #[test]
    fn test_starts_on_first_section() {
        assert_eq!(tracker().active(), "home");
    }

    #[test]
    fn test_rejects_empty_and_duplicate_lists() {
        const DUPES: &[Section] = &[
            Section { id: "a", label: "A" },
            Section { id: "b", label: "B" },
            Section { id: "a", label: "Again" },
        ];
        assert_eq!(SectionList::new(&[]), Err(SiteError::EmptySections));
        assert_eq!(SectionList::new(DUPES), Err(SiteError::DuplicateSection("a")));
    }

    #[test]
    fn test_single_visible_section_becomes_active() {
        for section in SECTIONS {
            let mut t = tracker();
            t.observe(seen(section.id, 0.5));
            assert_eq!(t.active(), section.id);
        }
    }

    #[test]
    fn test_below_threshold_or_leaving_is_ignored() {
        let mut t = tracker();
        assert!(!t.observe(seen("about", 0.2)));
        assert!(!t.observe(Observation {
            id: "about",
            is_intersecting: false,
            ratio: 0.9,
        }));
        assert_eq!(t.active(), "home");

        assert!(!t.observe(seen("about", 0.3995)));
        assert!(t.observe(seen("about", 0.4)));
        assert_eq!(t.active(), "about");
    }

    #[test]
    fn test_outgoing_section_under_threshold_keeps_incoming_active() {
        let mut t = tracker();
        assert!(t.observe(seen("services", 0.55)));
        assert!(!t.observe(seen("home", 0.3992)));
        assert_eq!(t.active(), "services");
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut t = tracker();
        assert!(!t.observe(seen("pricing", 1.0)));
        assert_eq!(t.active(), "home");
    }

    #[test]
    fn test_last_qualifying_entry_wins() {
        let mut t = tracker();
        let changed = t.observe_all([
            seen("services", 0.6),
            seen("contact", 0.45),
            seen("about", 0.1),
        ]);
        assert!(changed);
        assert_eq!(t.active(), "contact");
    }

    #[test]
    fn test_observe_reports_no_change_for_same_section() {
        let mut t = tracker();
        assert!(t.observe(seen("services", 0.5)));
        assert!(!t.observe(seen("services", 0.8)));
    }

    #[test]
    fn test_navigate_to_missing_element_is_noop() {
        let host = FakeHost::with(&[("home", 0.0)]);
        let mut t = tracker();
        t.observe(seen("services", 0.5));

        assert_eq!(t.navigate_to("contact", &host), None);
        assert_eq!(t.navigate_to("nowhere", &host), None);
        assert_eq!(t.active(), "services");
        assert!(host.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_navigate_to_scrolls_below_header() {
        let host = FakeHost::with(&[("home", 0.0), ("contact", 2400.0)]);
        let mut t = tracker();

        assert_eq!(t.navigate_to("contact", &host), Some(2320.0));
        assert_eq!(t.active(), "contact");
        assert_eq!(*host.scrolls.borrow(), vec![2320.0]);
    }

    #[test]
    fn test_navigate_to_top_section_never_scrolls_negative() {
        let host = FakeHost::with(&[("home", 20.0)]);
        let mut t = tracker();
        t.observe(seen("about", 1.0));

        assert_eq!(t.navigate_to("home", &host), Some(0.0));
        assert_eq!(t.active(), "home");
    }

    #[test]
    fn test_element_without_section_is_not_navigable() {
        let host = FakeHost::with(&[("footer", 3000.0)]);
        let mut t = tracker();
        assert_eq!(t.navigate_to("footer", &host), None);
        assert!(host.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_unmounted_tracker_ignores_late_callbacks() {
        let host = FakeHost::with(&[("contact", 900.0)]);
        let mut t = tracker();
        t.observe(seen("services", 0.5));
        t.unmount();

        assert!(!t.observe(seen("about", 1.0)));
        assert!(!t.observe_all([seen("contact", 1.0)]));
        assert_eq!(t.navigate_to("contact", &host), None);
        assert_eq!(t.active(), "services");
        assert!(host.scrolls.borrow().is_empty());

        t.remount();
        assert!(t.observe(seen("about", 1.0)));
    }
}
