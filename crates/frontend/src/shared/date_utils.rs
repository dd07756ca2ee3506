//! Форматирование дат для таблиц

use chrono::{DateTime, Utc};

/// Заглушка для отсутствующей даты
pub const NO_DATE: &str = "N/A";

/// Дата из метки времени в формате DD.MM.YYYY, иначе [`NO_DATE`]
pub fn format_timestamp_date(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%d.%m.%Y").to_string(),
        None => NO_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 23, 10, 0).unwrap();
        assert_eq!(format_timestamp_date(Some(&ts)), "05.03.2024");
        assert_eq!(format_timestamp_date(None), "N/A");
    }
}
