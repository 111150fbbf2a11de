use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::sync::LazyLock;

use error_location::ErrorLocation;
use regex::Regex;

pub const MOBILE_MAX_LENGTH: usize = 10;

static MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[0-9]{{{MOBILE_MAX_LENGTH}}}$")).expect("mobile pattern is a valid regex")
});

/// Check a mobile number against the fixed ten-digit pattern.
#[track_caller]
pub fn validate_mobile(mobile: &str) -> CoreResult<()> {
    if MOBILE_PATTERN.is_match(mobile) {
        Ok(())
    } else {
        Err(CoreError::InvalidMobile {
            value: mobile.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
