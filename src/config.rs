//! Tunables shared by every component: where the backend lives, how money is shown,
//! and how long each visual effect lasts.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub base_url: String,
    pub currency_symbol: String,
    pub mailbox_capacity: usize,
    pub toast: ToastTimings,
    pub badge_pulse: Duration,
    pub flight: FlightTimings,
}

impl UiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn with_toast_timings(mut self, toast: ToastTimings) -> Self {
        self.toast = toast;
        self
    }

    pub fn with_badge_pulse(mut self, pulse: Duration) -> Self {
        self.badge_pulse = pulse;
        self
    }

    pub fn with_flight_timings(mut self, flight: FlightTimings) -> Self {
        self.flight = flight;
        self
    }

    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity.max(1);
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            mailbox_capacity: 32,
            toast: ToastTimings::default(),
            badge_pulse: Duration::from_millis(300),
            flight: FlightTimings::default(),
        }
    }
}

/// Default lifetimes per severity, plus the transition lengths.
///
/// Errors stay up longer than the rest: they usually carry server text worth reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub success: Duration,
    pub error: Duration,
    pub warning: Duration,
    pub info: Duration,
    pub exit_transition: Duration,
    pub wiggle_delay: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            success: Duration::from_millis(3000),
            error: Duration::from_millis(4000),
            warning: Duration::from_millis(3500),
            info: Duration::from_millis(3000),
            exit_transition: Duration::from_millis(300),
            wiggle_delay: Duration::from_millis(300),
        }
    }
}

/// Phase offsets of the add-to-cart flight. `arrival_pulse` counts from `arrival`; the
/// others count from the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightTimings {
    pub flight: Duration,
    pub arrival: Duration,
    pub arrival_pulse: Duration,
    pub source_pulse: Duration,
}

impl Default for FlightTimings {
    fn default() -> Self {
        Self {
            flight: Duration::from_millis(800),
            arrival: Duration::from_millis(700),
            arrival_pulse: Duration::from_millis(800),
            source_pulse: Duration::from_millis(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = UiConfig::new("http://shop.test")
            .with_currency("$")
            .with_mailbox_capacity(0);

        assert_eq!(config.base_url, "http://shop.test");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.mailbox_capacity, 1);
        assert_eq!(config.toast.error, Duration::from_millis(4000));
    }
}
