//! Validation core of the talent marketplace mobile client.
//!
//! Pure checks over the values the screens submit: primitive formats
//! (email, password, URL, phone, amount, date, UUID), file uploads coming
//! from the Android pickers, and one validator per form. Every validator
//! returns a result object instead of failing, so screens can render the
//! messages inline.

pub mod models;
pub mod payload;
pub mod utils;

pub use utils::date::{Clock, FixedClock, SystemClock};
pub use utils::validation::{Rules, StandardRules, ValidationResult};
