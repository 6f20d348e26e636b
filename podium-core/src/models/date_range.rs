//! Competition date range

use chrono::NaiveDate;

use super::ValidationError;

/// Optional start/end pair where the end never precedes the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Build a range, rejecting `end < start` when both bounds are present.
    ///
    /// A single-day range (`start == end`) is valid, and either bound may be
    /// open.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, ValidationError> {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(ValidationError::InvalidRange { start, end });
            }
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn open_bounds_are_accepted() {
        assert!(DateRange::new(None, None).is_ok());
        assert!(DateRange::new(day(2024, 6, 1), None).is_ok());
        assert!(DateRange::new(None, day(2024, 5, 1)).is_ok());
    }

    #[test]
    fn same_day_is_accepted() {
        let range = DateRange::new(day(2024, 6, 1), day(2024, 6, 1)).unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = DateRange::new(day(2024, 6, 1), day(2024, 5, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRange { .. }));
    }
}
