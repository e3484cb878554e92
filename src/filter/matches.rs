use std::fmt;
use std::io::Write;

use chrono::NaiveDate;
use tracing::warn;

use crate::errors::AgentError;
use crate::filter::facility::{display_name, facility_name};
use crate::helpers::time::parse_calendar_date;
use crate::sources::availability::DayAvailability;
use crate::utils::constants::NO_AVAILABILITY_STATUS;

/// A facility with open availability on a day before the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub date: NaiveDate,
    /// blank for facility codes outside the lookup table
    pub facility_name: &'static str,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} is available", self.date.format("%Y-%m-%d"), self.facility_name)
    }
}

/// Days strictly before `target` with at least one available facility, one
/// match per available facility, in input order.
///
/// Days carrying the no-availability marker are skipped before their date is
/// even parsed. The `blocked` flag does not take part in the decision.
pub fn find_matches(days: &[DayAvailability], target: NaiveDate) -> Result<Vec<Match>, AgentError> {
    let mut matches = Vec::new();

    for day in days {
        if day.availability == NO_AVAILABILITY_STATUS {
            continue;
        }
        let date = parse_calendar_date(&day.date)?;

        for facility in day.facilities.iter().filter(|f| f.available) {
            if date >= target {
                continue;
            }
            if facility_name(&facility.facility_name).is_none() {
                warn!("unknown facility code '{}' on {}, printing blank name", facility.facility_name, day.date);
            }
            matches.push(Match {
                date,
                facility_name: display_name(&facility.facility_name),
            });
        }
    }

    Ok(matches)
}

/// One line per match.
pub fn write_matches<W: Write>(out: &mut W, matches: &[Match]) -> Result<(), AgentError> {
    for m in matches {
        writeln!(out, "{}", m)?;
    }
    out.flush()?;
    Ok(())
}
