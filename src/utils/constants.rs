//! Shared constants and invariants

/// Token issuance endpoint. Answers a bare POST with a short lived bearer token.
pub const TOKEN_URL: &str = "https://disneyland.disney.go.com/com-shared/api/get-token/";
/// Calendar availability endpoint, pinned to the two park ticket SKUs.
pub const AVAILABILITY_URL: &str =
    "https://cme-dlr.wdprapps.disney.com/availability/api/v2/availabilities/?sku=66282&sku=66283";

/// The token endpoint answers 403 to default client strings.
/// Swap this when the endpoint starts rejecting it.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:98.0) Gecko/20100101 Firefox/98.0";

pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 5;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Day level status meaning nothing can be booked that day.
pub const NO_AVAILABILITY_STATUS: &str = "cms-key-no-availability";

/// `YYYY-MM-DD`
pub const DATE_LAYOUT: &str = "%Y-%m-%d";
