//! Progressive reveal of an already-computed result list.

/// Items shown before any reveal.
pub const INITIAL_DISPLAY_COUNT: usize = 20;

/// Items added per reveal.
pub const DISPLAY_COUNT_STEP: usize = 20;

/// Tracks how much of the current result list is revealed.
///
/// The window never re-filters or re-sorts; it only exposes a growing
/// prefix. It watches `(revision, total)` pairs from the filter store:
/// a revision change means the list identity changed, which resets the
/// window so a stale count can't misreport how much of the new list is
/// visible.
///
/// Reveals are two-phase to match how the sentinel actually fires:
/// `sentinel_visible` marks a reveal in flight (the loading state), and
/// `commit_reveal` grows the count. After `disconnect`, both are no-ops,
/// so callbacks that straggle in after teardown can't mutate anything.
#[derive(Debug)]
pub struct PaginationWindow {
    display_count: usize,
    total: usize,
    revision: u64,
    loading: bool,
    connected: bool,
}

impl PaginationWindow {
    pub fn new() -> Self {
        PaginationWindow {
            display_count: INITIAL_DISPLAY_COUNT,
            total: 0,
            revision: 0,
            loading: false,
            connected: true,
        }
    }

    /// Feed the current list identity and length. A revision change
    /// resets the window; a pure length change (same revision) only
    /// re-caps it.
    pub fn observe(&mut self, revision: u64, total: usize) {
        if !self.connected {
            return;
        }
        if revision != self.revision {
            self.revision = revision;
            self.display_count = INITIAL_DISPLAY_COUNT;
            self.loading = false;
        }
        self.total = total;
    }

    /// How many items to render right now.
    pub fn display_count(&self) -> usize {
        self.display_count.min(self.total)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn all_revealed(&self) -> bool {
        self.display_count() >= self.total
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The sentinel entered the viewport. Begins a reveal and returns
    /// whether one began; refused while one is already in flight, when
    /// everything is revealed, or after disconnect.
    pub fn sentinel_visible(&mut self) -> bool {
        if !self.connected || self.loading || self.all_revealed() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply the in-flight reveal. Returns the new display count.
    pub fn commit_reveal(&mut self) -> usize {
        if self.connected && self.loading {
            self.loading = false;
            self.display_count = (self.display_count + DISPLAY_COUNT_STEP).min(self.total);
        }
        self.display_count()
    }

    /// Tear the observer down; every later callback becomes a no-op.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.loading = false;
    }

    /// The revealed prefix of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.display_count().min(items.len())]
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::new()
    }
}
