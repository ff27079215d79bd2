//! # Add-to-Cart Animator
//!
//! Plays the "item flies into the cart" effect. The animator holds no cart state; each call
//! to [`CartAnimator::animate`] starts an independent [`Flight`] that runs a fixed timeline:
//!
//! ```text
//!   0ms  source +animate-tada, flying item mounted at the source centre (Playing)
//! 700ms  cart link +animate-jello                                       (Settling)
//! 800ms  flying item removed
//! 1000ms source -animate-tada
//! 1500ms cart link -animate-jello                                       (Done)
//! ```

use crate::config::FlightTimings;
use crate::dom::{Dom, NodeId};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const FLYING_CLASS: &str = "flying-item";
pub const SOURCE_PULSE_CLASS: &str = "animate-tada";
pub const ARRIVAL_PULSE_CLASS: &str = "animate-jello";
pub const FLIGHT_ANIMATION: &str = "flyToCart 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) forwards";
const FLYING_GLYPH: &str = "🍽️";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FlightPhase {
    Pending,
    Playing,
    Settling,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    ArrivalPulse,
    RemoveItem,
    SourcePulseEnd,
    ArrivalPulseEnd,
}

/// The steps after t=0, ordered by offset.
fn timeline(timings: &FlightTimings) -> Vec<(Duration, Step)> {
    let mut steps = vec![
        (timings.arrival, Step::ArrivalPulse),
        (timings.flight, Step::RemoveItem),
        (timings.source_pulse, Step::SourcePulseEnd),
        (timings.arrival + timings.arrival_pulse, Step::ArrivalPulseEnd),
    ];
    // Stable: equal offsets keep the order above.
    steps.sort_by_key(|(at, _)| *at);
    steps
}

/// One running add-to-cart effect.
#[derive(Debug)]
pub struct Flight {
    item: NodeId,
    delta: (f64, f64),
    phase: watch::Receiver<FlightPhase>,
    task: JoinHandle<()>,
}

impl Flight {
    /// The temporary `div.flying-item`.
    pub fn item(&self) -> NodeId {
        self.item
    }

    /// Vector from the source centre to the cart-link centre, in pixels.
    pub fn delta(&self) -> (f64, f64) {
        self.delta
    }

    pub fn phase(&self) -> FlightPhase {
        *self.phase.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<FlightPhase> {
        self.phase.clone()
    }

    /// Waits until the timeline has run to the end.
    pub async fn finished(mut self) {
        let _ = self.phase.wait_for(|p| *p == FlightPhase::Done).await;
    }

    /// Stops the timeline where it is. Classes already added stay on the page.
    pub fn abort(self) {
        self.task.abort();
    }
}

pub struct CartAnimator {
    dom: Arc<dyn Dom>,
    anchor: Option<NodeId>,
    timings: FlightTimings,
}

impl CartAnimator {
    pub fn new(dom: Arc<dyn Dom>, anchor: Option<NodeId>, timings: FlightTimings) -> Self {
        Self {
            dom,
            anchor,
            timings,
        }
    }

    /// Starts a flight from `source` to the cart link. Returns `None`, after a warning, when
    /// the cart link is missing or either element has no layout.
    pub fn animate(&self, source: NodeId, item_name: &str, quantity: u32) -> Option<Flight> {
        let dom = self.dom.clone();
        let Some(anchor) = self.anchor.filter(|a| dom.contains(*a)) else {
            warn!("Cart icon not found for flying animation");
            return None;
        };
        let (Some(from), Some(to)) = (dom.bounding_rect(source), dom.bounding_rect(anchor)) else {
            warn!(%source, %anchor, "No layout for flying animation");
            return None;
        };

        let (x, y) = from.center();
        let (tx, ty) = to.center();
        let delta = (tx - x, ty - y);

        let (phase_tx, phase) = watch::channel(FlightPhase::Pending);

        dom.add_class(source, SOURCE_PULSE_CLASS);
        let item = dom.append_text_element(dom.body(), "div", &[FLYING_CLASS], FLYING_GLYPH);
        dom.set_attribute(item, "aria-label", &format!("{item_name} × {quantity}"));
        for (property, value) in [
            ("position", "fixed".to_string()),
            ("left", format!("{x}px")),
            ("top", format!("{y}px")),
            ("font-size", "2rem".to_string()),
            ("z-index", "10000".to_string()),
            ("pointer-events", "none".to_string()),
            ("--fly-x", format!("{}px", delta.0)),
            ("--fly-y", format!("{}px", delta.1)),
            ("animation", FLIGHT_ANIMATION.to_string()),
        ] {
            dom.set_style(item, property, &value);
        }
        phase_tx.send_replace(FlightPhase::Playing);
        debug!(item_name, quantity, dx = delta.0, dy = delta.1, "Flight started");

        let steps = timeline(&self.timings);
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now();
            for (at, step) in steps {
                tokio::time::sleep_until(start + at).await;
                match step {
                    Step::ArrivalPulse => {
                        dom.add_class(anchor, ARRIVAL_PULSE_CLASS);
                        phase_tx.send_replace(FlightPhase::Settling);
                    }
                    Step::RemoveItem => dom.remove(item),
                    Step::SourcePulseEnd => dom.remove_class(source, SOURCE_PULSE_CLASS),
                    Step::ArrivalPulseEnd => dom.remove_class(anchor, ARRIVAL_PULSE_CLASS),
                }
            }
            phase_tx.send_replace(FlightPhase::Done);
            debug!("Flight finished");
        });

        Some(Flight {
            item,
            delta,
            phase,
            task,
        })
    }
}
