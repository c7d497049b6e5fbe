use serde::{Deserialize, Serialize};

use crate::AppError;

/// A scheduled meeting shown in the upcoming list and the calendar panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// "HH:MM"
    pub time: String,
    pub client: String,
    /// Meeting format, e.g. "Видеоконсультация".
    #[serde(rename = "type")]
    pub kind: String,
    /// "DD.MM.YYYY"
    pub date: String,
}

/// Calendar day as (year, month, day).
pub type DayKey = (i32, u8, u8);

/// Parse a "DD.MM.YYYY" display date.
pub fn parse_display_date(s: &str) -> Result<DayKey, AppError> {
    let invalid = || AppError::invalid_date(format!("expected DD.MM.YYYY, got '{s}'"));

    let mut parts = s.split('.');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let day: u8 = day.parse().map_err(|_| invalid())?;
    let month: u8 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok((year, month, day))
}

impl Meeting {
    /// Whether the meeting falls on the given day. Unparseable dates never match.
    pub fn falls_on(&self, day: DayKey) -> bool {
        parse_display_date(&self.date).is_ok_and(|d| d == day)
    }
}

/// Meetings shown for a selected calendar day.
///
/// Unfiltered by default: the list is the same fixed set regardless of the
/// selected day. Filtering is opt-in through configuration.
pub fn meetings_for_day(meetings: &[Meeting], day: Option<DayKey>, filter: bool) -> Vec<Meeting> {
    match (filter, day) {
        (true, Some(day)) => meetings.iter().filter(|m| m.falls_on(day)).cloned().collect(),
        (true, None) => Vec::new(),
        (false, _) => meetings.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn parses_display_dates() {
        assert_eq!(parse_display_date("01.12.2025").unwrap(), (2025, 12, 1));
        assert_eq!(parse_display_date("3.1.2026").unwrap(), (2026, 1, 3));
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["", "2025-12-01", "01.13.2025", "00.12.2025", "01.12", "01.12.2025.1", "aa.bb.cccc"] {
            assert!(parse_display_date(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn list_is_static_regardless_of_selected_day() {
        let meetings = mock::upcoming_meetings();
        let on_first = meetings_for_day(&meetings, Some((2025, 12, 1)), false);
        let elsewhere = meetings_for_day(&meetings, Some((2030, 6, 15)), false);
        let none = meetings_for_day(&meetings, None, false);
        assert_eq!(on_first, meetings);
        assert_eq!(elsewhere, meetings);
        assert_eq!(none, meetings);
    }

    #[test]
    fn filtering_keeps_only_same_day() {
        let meetings = mock::upcoming_meetings();
        let filtered = meetings_for_day(&meetings, Some((2025, 12, 2)), true);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].client, "Смирнова А.");

        assert!(meetings_for_day(&meetings, Some((2025, 12, 4)), true).is_empty());
        assert!(meetings_for_day(&meetings, None, true).is_empty());
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(&mock::upcoming_meetings()[0]).unwrap();
        assert_eq!(json["type"], "Видеоконсультация");
    }
}
