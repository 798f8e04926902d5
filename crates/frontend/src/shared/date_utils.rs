/// Utilities for dates stamped on inventory items
use chrono::NaiveDate;

/// Current local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Check that a string has the zero-padded `DD-MM-YYYY` shape of item dates
#[cfg(test)]
pub(crate) fn is_item_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && NaiveDate::parse_from_str(value, "%d-%m-%Y").is_ok()
}
