/// Utilities for the date input

/// Today's date in ISO form (`YYYY-MM-DD`), as the browser sees it in UTC
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    iso_date_part(&String::from(now.to_iso_string())).to_string()
}

/// Date part of an ISO datetime string
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn iso_date_part(datetime_str: &str) -> &str {
    datetime_str.split('T').next().unwrap_or(datetime_str)
}
