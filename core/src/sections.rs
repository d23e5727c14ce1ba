//! Per-section selection state and page navigation.
//!
//! Each section owns at most one piece of transient state (a cursor plus an
//! open/expanded/flipped slot). None of it survives leaving the app.

use rizal_types::SectionId;

/// Bounded cursor over `len` items. Clamps rather than wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    pub fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let max = self.len - 1;
        self.index = self.index.saturating_add_signed(delta).min(max);
    }

    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Toggle `slot` to `index`; the same index again clears it.
fn toggle(slot: &mut Option<usize>, index: usize) {
    *slot = if *slot == Some(index) { None } else { Some(index) };
}

/// Life timeline: accordion over events that reveal as the cursor reaches them.
#[derive(Debug, Clone)]
pub struct LifeState {
    cursor: Cursor,
    expanded: Option<usize>,
    revealed: usize,
}

impl LifeState {
    /// Events visible before any scrolling.
    pub const INITIALLY_REVEALED: usize = 2;

    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cursor: Cursor::new(len),
            expanded: None,
            revealed: Self::INITIALLY_REVEALED.min(len),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Count of events revealed so far. Never decreases.
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.revealed
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor.move_by(delta);
        self.reveal_through(self.cursor.index() + 1);
    }

    pub fn toggle_expanded(&mut self) {
        if self.cursor.is_empty() {
            return;
        }
        toggle(&mut self.expanded, self.cursor.index());
    }

    /// Reveal everything up to (and including) the entry after `index`.
    fn reveal_through(&mut self, index: usize) {
        let target = (index + 1).min(self.cursor.len());
        self.revealed = self.revealed.max(target);
    }
}

/// Library: flip cards for the books and the scrolling poem spotlight.
#[derive(Debug, Clone)]
pub struct LibraryState {
    cursor: Cursor,
    flipped: Option<usize>,
    poem_scroll: u16,
}

impl LibraryState {
    #[must_use]
    pub fn new(books: usize) -> Self {
        Self {
            cursor: Cursor::new(books),
            flipped: None,
            poem_scroll: 0,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn flipped(&self) -> Option<usize> {
        self.flipped
    }

    #[must_use]
    pub fn poem_scroll(&self) -> u16 {
        self.poem_scroll
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor.move_by(delta);
    }

    /// Flip the card under the cursor. Returns true if it now shows its back.
    pub fn toggle_flip(&mut self) -> bool {
        if self.cursor.is_empty() {
            return false;
        }
        toggle(&mut self.flipped, self.cursor.index());
        self.flipped.is_some()
    }

    /// Scroll the poem; `max` is the last offset that still shows content.
    pub fn scroll_poem(&mut self, delta: i32, max: u16) {
        let next = i32::from(self.poem_scroll) + delta;
        self.poem_scroll = u16::try_from(next.max(0)).unwrap_or(u16::MAX).min(max);
    }
}

#[derive(Debug, Clone)]
pub struct GalleryState {
    cursor: Cursor,
    lightbox: Option<usize>,
}

impl GalleryState {
    #[must_use]
    pub fn new(photos: usize) -> Self {
        Self {
            cursor: Cursor::new(photos),
            lightbox: None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }

    /// Cursor moves are ignored while the lightbox is open.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.lightbox.is_none() {
            self.cursor.move_by(delta);
        }
    }

    pub fn open(&mut self) -> bool {
        if self.cursor.is_empty() || self.lightbox.is_some() {
            return false;
        }
        self.lightbox = Some(self.cursor.index());
        true
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }
}

/// Tabbed traveler view; exactly one tab is always active.
#[derive(Debug, Clone)]
pub struct TravelerState {
    active: Cursor,
}

impl TravelerState {
    #[must_use]
    pub fn new(tabs: usize) -> Self {
        Self {
            active: Cursor::new(tabs),
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.active.index()
    }

    pub fn next(&mut self) {
        self.active.move_by(1);
    }

    pub fn prev(&mut self) {
        self.active.move_by(-1);
    }

    pub fn select(&mut self, tab: usize) {
        self.active.set(tab);
    }
}

/// Current section of the single-page layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    current: SectionId,
}

impl Navigation {
    #[must_use]
    pub fn new(start: SectionId) -> Self {
        Self { current: start }
    }

    #[must_use]
    pub fn current(self) -> SectionId {
        self.current
    }

    /// Returns true if the section changed.
    pub fn go(&mut self, section: SectionId) -> bool {
        if self.current == section {
            return false;
        }
        tracing::info!(from = %self.current, to = %section, "Section changed");
        self.current = section;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go(self.current.next())
    }

    pub fn prev(&mut self) -> bool {
        self.go(self.current.prev())
    }

    /// Jump by 1-based position, as shown in the nav bar.
    pub fn jump(&mut self, number: usize) -> bool {
        match number.checked_sub(1).and_then(SectionId::from_index) {
            Some(section) => self.go(section),
            None => false,
        }
    }
}
