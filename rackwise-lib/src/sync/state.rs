//! Action lifecycle and list-view state

use crate::error::Error;
use crate::model::RackRecord;

/// Explicit three-state lifecycle of an asynchronous action.
///
/// Replaces implicit promise state: an action is in flight, resolved with a
/// value, or failed with a user-readable message.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionState<T> {
    /// The action was dispatched and has not resolved yet.
    InFlight,
    /// The action resolved with a value.
    Success(T),
    /// The action failed; the message is already translated for display.
    Failure(String),
}

impl<T> ActionState<T> {
    /// Resolves the state from an action result, translating errors into
    /// user-facing messages.
    pub fn from_result(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.user_message()),
        }
    }

    /// Returns `true` while the action is unresolved.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Returns the success value, if resolved successfully.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure message, if the action failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(msg) => Some(msg),
            _ => None,
        }
    }
}

/// The page coordinates of the rack list.
///
/// Mutation actions take this explicitly instead of reaching into shared
/// state, so the refresh-after-mutation behavior stays testable in
/// isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
}

impl PageContext {
    /// Creates a page context.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

/// An enriched rack listing with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RackListing {
    /// The enriched records for the current page.
    pub racks: Vec<RackRecord>,
    /// Total number of records across all pages.
    pub total: u64,
    /// Total number of pages at the current page size.
    pub pages: u64,
}

/// State of the paginated rack list view.
///
/// Holds the current page coordinates and the lifecycle of the latest list
/// fetch. Page coordinates change only through the explicit navigation
/// setters; list results land via [`ListState::resolve`].
#[derive(Debug, Clone)]
pub struct ListState {
    context: PageContext,
    state: ActionState<RackListing>,
}

impl ListState {
    /// Creates a list state starting at page 1 with the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            context: PageContext::new(1, page_size),
            state: ActionState::InFlight,
        }
    }

    /// Returns the current page coordinates.
    pub fn context(&self) -> PageContext {
        self.context
    }

    /// Navigates to a page.
    pub fn set_page(&mut self, page: u32) {
        self.context.page = page;
    }

    /// Changes the page size, resetting to the first page.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.context.page_size = page_size;
        self.context.page = 1;
    }

    /// Marks a new list fetch as in flight.
    pub fn begin(&mut self) {
        self.state = ActionState::InFlight;
    }

    /// Records the outcome of a list fetch.
    pub fn resolve(&mut self, result: Result<RackListing, Error>) {
        self.state = ActionState::from_result(result);
    }

    /// Returns the lifecycle state of the latest fetch.
    pub fn state(&self) -> &ActionState<RackListing> {
        &self.state
    }

    /// Returns the current listing, if the latest fetch succeeded.
    pub fn listing(&self) -> Option<&RackListing> {
        self.state.success()
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(PageContext::default().page_size)
    }
}
