use std::num::IntErrorKind;

use crate::errors::{ LengthError, SubmitBlocked };
use crate::generators::ClassFlags;
use crate::password::PasswordRequest;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// Only a truly empty field is "required"; blank text is not a number.
pub fn validate_length(raw: &str) -> Result<usize, LengthError> {
    if raw.is_empty() {
        return Err(LengthError::Required);
    }

    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(LengthError::NotANumber);
    }

    let value = match cleaned.parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                return Err(LengthError::OutOfRange);
            }
            _ => return Err(LengthError::NotANumber),
        },
    };

    if value < MIN_LENGTH as i64 || value > MAX_LENGTH as i64 {
        return Err(LengthError::OutOfRange);
    }

    Ok(value as usize)
}

pub fn check_request(raw_length: &str, flags: ClassFlags) -> Result<PasswordRequest, SubmitBlocked> {
    let length = validate_length(raw_length)?;

    if !flags.any() {
        return Err(SubmitBlocked::NoClassSelected);
    }

    Ok(PasswordRequest { length, flags })
}

pub fn can_submit(raw_length: &str, flags: ClassFlags) -> bool {
    check_request(raw_length, flags).is_ok()
}
