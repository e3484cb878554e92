use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::AgentError;
use crate::utils::constants::DATE_LAYOUT;

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Strict calendar date parsing: exactly `YYYY-MM-DD`, zero padded, no offset.
///
/// chrono tolerates signs, blanks and unpadded fields, so the shape is
/// checked byte by byte first.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, AgentError> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(AgentError::MalformedDate(value.to_owned()));
    }
    NaiveDate::parse_from_str(value, DATE_LAYOUT)
        .map_err(|_| AgentError::MalformedDate(value.to_owned()))
}

/// Command line flavour of [`parse_calendar_date`].
pub fn parse_target_date(value: &str) -> Result<NaiveDate, AgentError> {
    parse_calendar_date(value).map_err(|_| {
        AgentError::InvalidArgument(format!("target date '{}' is not in YYYY-MM-DD form", value))
    })
}
