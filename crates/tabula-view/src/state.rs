#![forbid(unsafe_code)]

//! Interaction state machine.
//!
//! [`ViewState`] is the `(sort, search, page)` tuple driving derivation,
//! mutated only by discrete user events and read by the pure pipeline.
//! Every transition is synchronous and runs to completion before the
//! next event is processed.

/// Active sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending comparator order.
    #[default]
    Ascending,
    /// Descending: the ascending order, reversed.
    Descending,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Which column (if any) is the active sort key, and which way.
///
/// `column`, when set, must index into the column sequence supplied to
/// the pipeline; derivation fails fast otherwise. `direction` is
/// meaningless while `column` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// Index of the active sort column.
    pub column: Option<usize>,
    /// Active direction.
    pub direction: Direction,
}

/// Per-column sort-direction indicator for header rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column is not the active sort key.
    None,
    /// Column sorts ascending.
    Ascending,
    /// Column sorts descending.
    Descending,
}

/// Pagination control activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Step back one page; no-op on the first page.
    Previous,
    /// Step forward one page; no-op on the last page.
    Next,
    /// Jump to an explicit page, clamped into range.
    Goto(usize),
}

/// A discrete user interaction consumed from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A column header was activated (clicked).
    ColumnActivated(usize),
    /// A pagination control was activated.
    PageControl(PageControl),
    /// The search text changed.
    SearchChanged(String),
}

/// The user-mutable view parameters: sort, search, and page.
///
/// # Invariants
///
/// 1. `page` may transiently exceed the range implied by the latest
///    derivation (a narrowing search shrinks the page count first); the
///    pipeline still yields a well-defined empty page, and
///    [`ViewState::clamp_to_pages`] restores the invariant on the next
///    derivation cycle.
/// 2. `num_pages()` is always >= 1; an empty result set still has one
///    (empty) page.
/// 3. Transitions never reset sibling state: re-sorting keeps the page
///    index, search changes keep the page index and sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Active sort selection.
    pub sort: SortState,
    /// Active search text; empty means no filter.
    pub search: String,
    /// Active page index (0-based).
    pub page: usize,
    num_pages: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort: SortState::default(),
            search: String::new(),
            page: 0,
            num_pages: 1,
        }
    }
}

impl ViewState {
    /// Initial state: no sort, empty search, page 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Page count observed at the last derivation (1 before the first).
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// Apply a user event.
    pub fn handle_event(&mut self, event: &TableEvent) {
        match event {
            TableEvent::ColumnActivated(index) => self.activate_column(*index),
            TableEvent::PageControl(control) => self.page_control(*control),
            TableEvent::SearchChanged(text) => self.set_search(text.clone()),
        }
    }

    /// Column header activation: re-activating the current sort column
    /// flips the direction; any other column becomes the ascending sort
    /// key. The page index is left untouched.
    pub fn activate_column(&mut self, index: usize) {
        if self.sort.column == Some(index) {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort.column = Some(index);
            self.sort.direction = Direction::Ascending;
        }
    }

    /// Pagination control activation, bounded by the page count observed
    /// at the last derivation.
    pub fn page_control(&mut self, control: PageControl) {
        match control {
            PageControl::Previous => {
                if self.page > 0 {
                    self.page -= 1;
                }
            }
            PageControl::Next => {
                if self.page + 1 < self.num_pages {
                    self.page += 1;
                }
            }
            PageControl::Goto(target) => {
                self.page = target.min(self.num_pages - 1);
            }
        }
    }

    /// Store new search text verbatim: no trimming, no debouncing, and
    /// no page reset.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Record the page count produced by a derivation and clamp the page
    /// index back into `[0, num_pages - 1]`.
    ///
    /// Counts below 1 are treated as 1 (an empty result set still has
    /// one empty page).
    pub fn clamp_to_pages(&mut self, num_pages: usize) {
        self.num_pages = num_pages.max(1);
        self.page = self.page.min(self.num_pages - 1);
    }

    /// Sort indicator for column `index`.
    pub fn indicator(&self, index: usize) -> SortIndicator {
        if self.sort.column != Some(index) {
            return SortIndicator::None;
        }
        match self.sort.direction {
            Direction::Ascending => SortIndicator::Ascending,
            Direction::Descending => SortIndicator::Descending,
        }
    }
}
