//! Outcome of a dashboard data load.

/// Where the displayed case list came from.
///
/// The presentation layer switches on this tag instead of juggling
/// loading/error flags.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<C> {
    /// No definitive outcome yet.
    Pending,
    /// The backend returned a valid list, adopted verbatim.
    Loaded(Vec<C>),
    /// The backend failed; the fixed mock dataset is shown instead.
    Fallback(Vec<C>),
}

impl<C> LoadState<C> {
    /// The held list; empty while pending.
    pub fn cases(&self) -> &[C] {
        match self {
            LoadState::Pending => &[],
            LoadState::Loaded(cases) | LoadState::Fallback(cases) => cases,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadState::Fallback(_))
    }
}

impl<C> Default for LoadState<C> {
    fn default() -> Self {
        LoadState::Pending
    }
}
