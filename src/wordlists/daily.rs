//! Challenge numbering by calendar day

use chrono::{Local, NaiveDate};

/// Challenge index for `today`: whole days since `epoch`, plus one
///
/// Works on calendar dates only, so the time of day never matters.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use cuordle::wordlists::day_index;
///
/// let epoch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(day_index(epoch, epoch), 1);
/// assert_eq!(day_index(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(), epoch), 32);
/// ```
#[must_use]
pub fn day_index(today: NaiveDate, epoch: NaiveDate) -> i64 {
    today.signed_duration_since(epoch).num_days() + 1
}

/// The current local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Days, FixedOffset, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_challenge_one() {
        let epoch = date(2025, 1, 1);
        assert_eq!(day_index(epoch, epoch), 1);
    }

    #[test]
    fn increments_by_one_per_day() {
        let epoch = date(2025, 1, 1);
        let mut day = epoch;
        for expected in 1..=400 {
            assert_eq!(day_index(day, epoch), expected);
            day = day.checked_add_days(Days::new(1)).unwrap();
        }
    }

    #[test]
    fn stable_across_time_of_day() {
        let epoch = date(2025, 1, 1);
        let day = date(2025, 3, 30);
        let early = day.and_time(NaiveTime::from_hms_opt(0, 0, 1).unwrap());
        let late = day.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(
            day_index(early.date(), epoch),
            day_index(late.date(), epoch)
        );
    }

    #[test]
    fn local_date_ignores_offset_changes_within_day() {
        // Same local calendar day before and after a DST-style offset change
        let before = DateTime::<FixedOffset>::parse_from_rfc3339("2025-03-30T01:30:00+01:00")
            .unwrap()
            .date_naive();
        let after = DateTime::<FixedOffset>::parse_from_rfc3339("2025-03-30T23:30:00+02:00")
            .unwrap()
            .date_naive();
        let epoch = date(2025, 1, 1);
        assert_eq!(day_index(before, epoch), day_index(after, epoch));
        assert_eq!(day_index(before, epoch), 89);
    }

    #[test]
    fn dates_before_epoch_go_non_positive() {
        let epoch = date(2025, 1, 1);
        assert_eq!(day_index(date(2024, 12, 31), epoch), 0);
    }
}
