//! Small helpers shared by the page scripts: money and date formatting, form validation,
//! and rate limiting of event handlers.

pub mod format;
pub mod timing;
pub mod validate;

pub use format::{
    clamp, format_amount, format_currency, format_date, format_date_time, relative_time,
    truncate,
};
pub use timing::{Debouncer, Throttle};
pub use validate::{is_valid_email, validate_password, validate_username, Validation};
