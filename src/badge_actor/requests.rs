use crate::model::{BadgeState, RefreshOutcome};
use ui_runtime::Response;

#[derive(Debug)]
pub enum BadgeRequest {
    /// Re-reads the count from the cart. Replies when the fetch settles.
    Refresh {
        respond_to: Response<RefreshOutcome>,
    },
    Update {
        count: u32,
        respond_to: Response<BadgeState>,
    },
    Increment {
        by: u32,
        respond_to: Response<BadgeState>,
    },
    Decrement {
        by: u32,
        respond_to: Response<BadgeState>,
    },
    State {
        respond_to: Response<BadgeState>,
    },
}

#[derive(Debug)]
pub enum BadgeSignal {
    /// A cart fetch finished. `Err` carries the reason.
    Fetched {
        generation: u64,
        result: Result<u32, String>,
    },
    PulseEnd {
        pulse: u64,
    },
}
