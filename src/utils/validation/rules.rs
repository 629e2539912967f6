//! The set of value checks the form validators are built from.
//!
//! Form validators never call the primitive validators directly; they go
//! through a [`Rules`] implementation. Production code uses
//! [`StandardRules`]. A test can wrap it and replace a single check, for
//! example forcing every date to be invalid, without touching anything
//! global.

use super::files;
use super::primitives;
use super::types::{FileDescriptor, FilesValidation};
use crate::utils::date::{Clock, SystemClock};

pub trait Rules {
    /// Clock used for the "must be in the future" date checks
    fn clock(&self) -> &dyn Clock {
        &SystemClock
    }

    fn validate_email(&self, value: Option<&str>) -> bool {
        primitives::validate_email(value)
    }

    fn validate_password(&self, value: Option<&str>) -> bool {
        primitives::validate_password(value)
    }

    fn validate_url(&self, value: Option<&str>, allow_relative: bool) -> bool {
        primitives::validate_url(value, allow_relative)
    }

    fn is_valid_amount(&self, value: Option<f64>) -> bool {
        primitives::is_valid_amount(value)
    }

    fn is_valid_date(&self, value: Option<&str>, must_be_future: bool) -> bool {
        primitives::is_valid_date(value, must_be_future, self.clock())
    }

    fn is_valid_date_range(&self, start: Option<&str>, end: Option<&str>) -> bool {
        primitives::is_valid_date_range(start, end)
    }

    fn validate_file_uploads(&self, files: Option<&[FileDescriptor]>) -> FilesValidation {
        files::validate_file_uploads(files)
    }
}

/// The production rule set, reading "now" from `C`
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules<C = SystemClock> {
    clock: C,
}

impl StandardRules {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> StandardRules<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> Rules for StandardRules<C> {
    fn clock(&self) -> &dyn Clock {
        &self.clock
    }
}
