//! Data parsing helpers for configuration tables.
//!
//! Holiday tables carry dates either in ISO 8601 form (`YYYY-MM-DD`) or in
//! the dotted European form (`DD.MM.YYYY`), and region assignments as a
//! comma-separated id list.  The parsers here only split and convert; range
//! validation of the resulting numbers is left to the caller.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year: u16 = parts[0].trim().parse().ok()?;
    let month: u8 = parts[1].trim().parse().ok()?;
    let day: u8 = parts[2].trim().parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in `DD.MM.YYYY` format.
///
/// Returns `(year, month, day)` on success.
pub fn parse_dotted_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u8 = parts[0].trim().parse().ok()?;
    let month: u8 = parts[1].trim().parse().ok()?;
    let year: u16 = parts[2].trim().parse().ok()?;
    Some((year, month, day))
}

/// Parse either of the two supported date forms.
pub fn parse_date(s: &str) -> Option<(u16, u8, u8)> {
    parse_iso_date(s).or_else(|| parse_dotted_date(s))
}

/// Parse a comma-separated list of integer ids such as `"0, 1,2"`.
///
/// Whitespace around entries is ignored.  Returns `None` if any entry is
/// empty or not an integer, or if the list itself is blank.
pub fn parse_id_list(s: &str) -> Option<Vec<i32>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.split(',').map(|part| part.trim().parse().ok()).collect()
}
