//! Counting-up animation for the dashboard stat cards.

use crate::dom::{Dom, NodeId};
use std::time::Duration;

/// One frame every 16 ms, roughly 60 fps.
pub const FRAME: Duration = Duration::from_millis(16);

/// Longest animation played frame by frame: one minute. Longer durations count faster.
pub const MAX_FRAMES: usize = 3750;

/// The text shown on each frame while counting from zero to `target` over `duration`.
///
/// Values are floored; the last frame is always exactly `target`. At most [`MAX_FRAMES`]
/// frames are produced.
pub fn stat_counter_frames(target: u64, duration: Duration, prefix: &str, suffix: &str) -> Vec<String> {
    let ticks = (duration.as_secs_f64() / FRAME.as_secs_f64()).min(MAX_FRAMES as f64);
    let target_f = target as f64;
    if target == 0 || ticks < 1.0 {
        return vec![format!("{prefix}{target}{suffix}")];
    }

    let increment = target_f / ticks;
    let mut current = 0.0;
    let mut frames = Vec::with_capacity(ticks.ceil() as usize);
    loop {
        current += increment;
        if current >= target_f || frames.len() + 1 >= MAX_FRAMES {
            frames.push(format!("{prefix}{target}{suffix}"));
            return frames;
        }
        frames.push(format!("{prefix}{}{suffix}", current.floor() as u64));
    }
}

/// Plays [`stat_counter_frames`] on `node`, one frame per [`FRAME`].
pub async fn animate_stat_counter(
    dom: &dyn Dom,
    node: NodeId,
    target: u64,
    duration: Duration,
    prefix: &str,
    suffix: &str,
) {
    let mut ticker = tokio::time::interval(FRAME);
    // The first tick of an interval completes immediately.
    ticker.tick().await;
    for frame in stat_counter_frames(target, duration, prefix, suffix) {
        ticker.tick().await;
        dom.set_text(node, &frame);
    }
}
