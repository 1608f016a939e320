use chrono::NaiveDate;

/// Whole calendar days between the rental start and end. Negative when the
/// range is reversed; callers clamp before pricing.
pub fn elapsed_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Rental total in major currency units.
pub fn total(elapsed_days: i64, daily_rate: i64) -> i64 {
    elapsed_days * daily_rate
}

/// Payment intents are denominated in minor units (cents).
pub fn minor_units(total: i64) -> i64 {
    total * 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn elapsed_days_counts_whole_calendar_days() {
        assert_eq!(elapsed_days(date(2024, 1, 1), date(2024, 1, 5)), 4);
        assert_eq!(elapsed_days(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn elapsed_days_is_negative_for_reversed_ranges() {
        assert_eq!(elapsed_days(date(2024, 1, 5), date(2024, 1, 1)), -4);
    }

    #[test]
    fn total_is_days_times_rate() {
        assert_eq!(total(4, 100), 400);
        assert_eq!(total(0, 100), 0);
    }

    #[test]
    fn minor_units_converts_to_cents() {
        assert_eq!(minor_units(400), 40000);
        assert_eq!(minor_units(0), 0);
    }
}
