use chrono::{DateTime, Datelike, Utc};

const MOIS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Formats a timestamp as a French long date, e.g. "01 juin 2024".
///
/// Used by the notification messages emitted by the reservation workflow.
///
/// # Arguments
/// - `date` - The timestamp to format
///
/// # Returns
/// - `String` - Day (two digits), full French month name and year
pub fn format_date_longue(date: DateTime<Utc>) -> String {
    let mois = MOIS
        .get(date.month0() as usize)
        .copied()
        .unwrap_or("janvier");
    format!("{:02} {} {}", date.day(), mois, date.year())
}

#[cfg(test)]
mod tests {
    use super::format_date_longue;
    use chrono::{TimeZone, Utc};

    #[test]
    fn formats_french_long_date() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(format_date_longue(date), "01 juin 2024");
    }

    #[test]
    fn formats_december() {
        let date = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_date_longue(date), "31 décembre 2025");
    }
}
