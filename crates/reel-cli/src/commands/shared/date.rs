use chrono::NaiveDate;
use reel_core::errors::CoreError;

/// Validate a `YYYY-MM-DD` reference date.
pub fn parse_on_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|error| {
        CoreError::Validation(format!(
            "invalid --on-date '{raw}' (expected YYYY-MM-DD): {error}"
        ))
    })
}
