use std::fmt::Display;

/// Lifecycle of the cart overlay.
///
/// ```text
/// Closed --open--> Opening --shell mounted--> Loading --ok--> Loaded
///                                              Loading --failure--> Error
/// any open state --close--> Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Opening,
    Loading,
    Loaded,
    Error,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        !matches!(self, OverlayState::Closed)
    }
}

impl Display for OverlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OverlayState::Closed => "Closed",
            OverlayState::Opening => "Opening",
            OverlayState::Loading => "Loading",
            OverlayState::Loaded => "Loaded",
            OverlayState::Error => "Error",
        };
        f.write_str(name)
    }
}
