//! Pure validation rules for form fields
//!
//! Rules classify a raw value into an [`ErrorKind`] (or pass). They never
//! write `touched` or `error` state; that is the controller's job.

use thiserror::Error;

/// Why a field value fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("value is required")]
    Empty,
    #[error("value is not a whole number")]
    InvalidFormat,
    #[error("value must be greater than zero")]
    NotPositive,
}

/// Name rule: fails with `Empty` when the trimmed value has zero length
pub fn validate_name(raw: &str) -> Option<ErrorKind> {
    if raw.trim().is_empty() {
        Some(ErrorKind::Empty)
    } else {
        None
    }
}

/// Parse an age value, reporting the first applicable failure.
///
/// Checks run in a fixed order: empty, then format, then sign. A
/// non-numeric string is never reported as `NotPositive`.
pub fn parse_age(raw: &str) -> Result<u32, ErrorKind> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ErrorKind::Empty);
    }
    let n: i64 = trimmed.parse().map_err(|_| ErrorKind::InvalidFormat)?;
    if n <= 0 {
        return Err(ErrorKind::NotPositive);
    }
    u32::try_from(n).map_err(|_| ErrorKind::InvalidFormat)
}

/// Age rule: `Empty`, `InvalidFormat`, or `NotPositive`, in that order
pub fn validate_age(raw: &str) -> Option<ErrorKind> {
    parse_age(raw).err()
}

/// Consent rule: the toggle has no error condition of its own
pub fn validate_consent(_accepted: bool) -> Option<ErrorKind> {
    None
}
