use crate::error::CoreError;
use chrono::NaiveDate;

/// Parses an order date as exported by marketplace reports.
///
/// Accepted shapes:
/// - `YYYY-MM-DD`, optionally followed by a time part (`T...` or ` ...`)
/// - `MM-DD-YY` and `MM-DD-YYYY` (also with `/` separators)
///
/// The time of day is discarded; orders are bucketed by calendar day.
pub fn parse_order_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    let day_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or_default();

    let segments: Vec<&str> = day_part.split(|c: char| c == '-' || c == '/').collect();
    let format = match segments.as_slice() {
        [year, _, _] if year.len() == 4 => "%Y-%m-%d",
        [_, _, year] if year.len() == 4 => "%m-%d-%Y",
        [_, _, year] if year.len() == 2 => "%m-%d-%y",
        _ => return Err(CoreError::InvalidInput("order_date".to_string(), raw.to_string())),
    };

    let normalized = day_part.replace('/', "-");
    NaiveDate::parse_from_str(&normalized, format)
        .map_err(|_| CoreError::InvalidInput("order_date".to_string(), raw.to_string()))
}

/// Parses an optional date-range bound supplied by a caller.
///
/// A blank bound means "not applied". An unparsable bound also degrades to
/// "not applied" instead of failing the request.
pub fn parse_date_bound(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match parse_order_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!(bound = raw, error = %e, "Ignoring unparsable date bound.");
            None
        }
    }
}
