/// Facility codes used by the availability API.
pub const CALIFORNIA_ADVENTURE_PARK: &str = "DLR_CA";
pub const DISNEYLAND_PARK: &str = "DLR_DP";

/// Code to human readable name.
const FACILITY_NAMES: [(&str, &str); 2] = [
    (CALIFORNIA_ADVENTURE_PARK, "California Adventure Park"),
    (DISNEYLAND_PARK, "Disneyland Park"),
];

/// Human readable facility name, `None` for codes outside the table.
pub fn facility_name(code: &str) -> Option<&'static str> {
    FACILITY_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Name used in output lines. Unknown codes pass through as an empty label,
/// they are not dropped and not rejected.
pub fn display_name(code: &str) -> &'static str {
    facility_name(code).unwrap_or("")
}
