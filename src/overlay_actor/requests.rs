use crate::model::{CartSnapshot, OverlayState};
use tokio::sync::watch;
use ui_runtime::Response;

#[derive(Debug)]
pub enum OverlayRequest {
    /// Opens the overlay. Without `force` this is a no-op while already open.
    Open {
        force: bool,
        respond_to: Response<OverlayState>,
    },
    Close {
        respond_to: Response<OverlayState>,
    },
    Toggle {
        respond_to: Response<OverlayState>,
    },
    /// Fetches the cart again if the overlay is open.
    Reload {
        respond_to: Response<OverlayState>,
    },
    State {
        respond_to: Response<OverlayState>,
    },
    Subscribe {
        respond_to: Response<watch::Receiver<OverlayState>>,
    },
}

#[derive(Debug)]
pub enum OverlaySignal {
    Fetched {
        generation: u64,
        result: Result<CartSnapshot, String>,
    },
}
