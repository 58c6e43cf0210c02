use crate::error::{ProformaError, Result};
use chrono::{Days, Month, NaiveDate};

/// Number of monthly periods in every projection.
pub const PROJECTION_MONTHS: usize = 12;

/// Calendar month for a 0-based period index (0 = January).
pub fn period_month(index: usize) -> Result<Month> {
    if index >= PROJECTION_MONTHS {
        return Err(ProformaError::InvalidPeriodIndex(index));
    }
    Month::try_from(index as u8 + 1).map_err(|_| ProformaError::InvalidPeriodIndex(index))
}

/// Three-letter label for a period index, e.g. "Jan".
pub fn period_label(index: usize) -> Result<&'static str> {
    let month = period_month(index)?;
    Ok(&month.name()[..3])
}

/// Labels for all twelve periods, Jan..Dec.
pub fn period_labels() -> [&'static str; PROJECTION_MONTHS] {
    [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
}

pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year.checked_add(1) } else { Some(year) };

    next_year
        .and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .ok_or(ProformaError::InvalidYear(year))
}

/// Month-end date of a period when the projection starts in January of `year`.
pub fn period_end_date(year: i32, index: usize) -> Result<NaiveDate> {
    let month = period_month(index)?;
    last_day_of_month(year, month.number_from_month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_labels_match_chrono() {
        for (index, label) in period_labels().iter().enumerate() {
            assert_eq!(period_label(index).unwrap(), *label);
        }
    }

    #[test]
    fn test_period_out_of_range() {
        assert!(matches!(
            period_label(12),
            Err(ProformaError::InvalidPeriodIndex(12))
        ));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(
            last_day_of_month(2023, 2).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            last_day_of_month(2024, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            last_day_of_month(2023, 12).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_period_end_date() {
        assert_eq!(
            period_end_date(2025, 0).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert_eq!(
            period_end_date(2025, 11).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert!(period_end_date(300_000, 11).is_err());
    }
}
