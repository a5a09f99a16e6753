//! Page arithmetic for the banner listing and the first/previous/next/last pager.
//!
//! The page state is always derived from the item total and the page size
//! known to the server; it is never read back from rendered text.

use serde::{Deserialize, Serialize};

/// Route of the paginated listing page.
pub const HOME_ROUTE: &str = "/home";

/// Builds the navigation URL for `page` on `route`.
pub fn page_url(route: &str, page: usize) -> String {
    format!("{route}?page={page}")
}

/// Parses a raw `page` query value. Anything that is not a positive integer
/// counts as "no page requested".
pub fn parse_page(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page > 0)
}

/// Current position within a listing. `current_page` is always within
/// `1..=max_page` and `max_page` is at least 1, even for an empty listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current_page: usize,
    max_page: usize,
}

impl PageState {
    /// Clamps `current_page` into `1..=max_page`.
    pub fn from_parts(current_page: usize, max_page: usize) -> Self {
        let max_page = max_page.max(1);
        Self {
            current_page: current_page.clamp(1, max_page),
            max_page,
        }
    }

    /// State for `total_items` split into pages of `per_page`, positioned at
    /// `requested` (page 1 when absent, last page when beyond the end).
    pub fn new(requested: Option<usize>, total_items: usize, per_page: usize) -> Self {
        Self::from_parts(
            requested.unwrap_or(1),
            Self::max_page_for(total_items, per_page),
        )
    }

    pub fn max_page_for(total_items: usize, per_page: usize) -> usize {
        total_items.div_ceil(per_page.max(1)).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn max_page(&self) -> usize {
        self.max_page
    }

    /// Number of items preceding the current page.
    pub fn offset(&self, per_page: usize) -> usize {
        (self.current_page - 1) * per_page
    }

    pub fn position(&self) -> PagePosition {
        match (self.current_page == 1, self.current_page == self.max_page) {
            (true, true) => PagePosition::Single,
            (true, false) => PagePosition::AtStart,
            (false, true) => PagePosition::AtEnd,
            (false, false) => PagePosition::Middle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePosition {
    /// The only page: every control is disabled.
    Single,
    AtStart,
    Middle,
    AtEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PagerAction {
    First,
    Previous,
    Next,
    Last,
}

/// A single navigation button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerControl {
    pub action: PagerAction,
    /// Page the control leads to.
    pub page: usize,
    pub enabled: bool,
    /// Full-page navigation target.
    pub href: String,
}

impl PagerControl {
    fn new(action: PagerAction, page: usize, enabled: bool, route: &str) -> Self {
        Self {
            action,
            page,
            enabled,
            href: page_url(route, page),
        }
    }
}

/// View model of the first/previous/next/last control cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub page: usize,
    pub max_page: usize,
    pub position: PagePosition,
    pub first: PagerControl,
    pub previous: PagerControl,
    pub next: PagerControl,
    pub last: PagerControl,
}

impl Pager {
    pub fn new(state: PageState, route: &str) -> Self {
        let page = state.current_page();
        let max_page = state.max_page();
        let has_previous = page > 1;
        let has_next = page < max_page;

        Self {
            page,
            max_page,
            position: state.position(),
            first: PagerControl::new(PagerAction::First, 1, has_previous, route),
            previous: PagerControl::new(
                PagerAction::Previous,
                page.saturating_sub(1).max(1),
                has_previous,
                route,
            ),
            next: PagerControl::new(PagerAction::Next, (page + 1).min(max_page), has_next, route),
            last: PagerControl::new(PagerAction::Last, max_page, has_next, route),
        }
    }

    /// Controls in display order.
    pub fn controls(&self) -> [&PagerControl; 4] {
        [&self.first, &self.previous, &self.next, &self.last]
    }

    /// Label of the current-page indicator, e.g. `2/5`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.page, self.max_page)
    }
}

/// One page of items together with its pager.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pager: Pager,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, state: PageState, route: &str) -> Self {
        Self {
            items,
            pager: Pager::new(state, route),
        }
    }
}
