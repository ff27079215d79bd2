use std::fmt::Display;

/// What the cart badge shows. `visible` always equals `count > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BadgeState {
    pub count: u32,
    pub visible: bool,
}

impl BadgeState {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            visible: count > 0,
        }
    }
}

/// How a `refresh()` settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Not signed in as a customer, or no badge anchor. No request was made.
    Skipped,
    /// The fetched count was applied.
    Applied(u32),
    /// A newer refresh started before this one finished; its result was discarded.
    Stale,
    /// The fetch failed and the previous count was kept.
    Failed(String),
}

impl Display for RefreshOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshOutcome::Skipped => f.write_str("skipped"),
            RefreshOutcome::Applied(count) => write!(f, "applied({count})"),
            RefreshOutcome::Stale => f.write_str("stale"),
            RefreshOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
