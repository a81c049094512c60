//! Timestamp plans.

use chrono::{Duration, NaiveDateTime};

use super::error::TimestampError;

/// Format accepted for the base datetime on the command line.
pub const INPUT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `YYYY-MM-DD HH:MM:SS`.
pub fn parse_base_datetime(input: &str) -> Result<NaiveDateTime, TimestampError> {
    NaiveDateTime::parse_from_str(input.trim(), INPUT_DATETIME_FORMAT).map_err(|_| {
        TimestampError::InvalidDatetime {
            input: input.to_string(),
        }
    })
}

/// Base timestamp plus a fixed step between consecutive items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampPlan {
    base: NaiveDateTime,
    step_secs: u32,
}

impl TimestampPlan {
    /// Creates a plan. `step_secs` must be at least 1.
    pub fn new(base: NaiveDateTime, step_secs: u32) -> Result<Self, TimestampError> {
        if step_secs == 0 {
            return Err(TimestampError::InvalidStep(step_secs));
        }
        Ok(Self { base, step_secs })
    }

    /// A plan for a single item, stamped exactly at `base`.
    pub fn single(base: NaiveDateTime) -> Self {
        Self { base, step_secs: 1 }
    }

    pub fn base(&self) -> NaiveDateTime {
        self.base
    }

    pub fn step_secs(&self) -> u32 {
        self.step_secs
    }

    /// `base + index * step`.
    pub fn timestamp_for(&self, index: usize) -> Result<NaiveDateTime, TimestampError> {
        let offset = i64::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(i64::from(self.step_secs)))
            .and_then(Duration::try_seconds)
            .ok_or(TimestampError::Overflow { index })?;
        self.base
            .checked_add_signed(offset)
            .ok_or(TimestampError::Overflow { index })
    }

    /// Checks that every index below `len` maps to a valid timestamp.
    pub fn validate_len(&self, len: usize) -> Result<(), TimestampError> {
        match len.checked_sub(1) {
            Some(last) => self.timestamp_for(last).map(|_| ()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_base_datetime() {
        assert_eq!(parse_base_datetime("2024-05-01 09:30:00").unwrap(), base());
        assert_eq!(parse_base_datetime(" 2024-05-01 09:30:00\n").unwrap(), base());
    }

    #[test]
    fn test_parse_base_datetime_rejects_other_formats() {
        for input in ["2024/05/01 09:30:00", "2024-05-01", "2024-13-01 00:00:00", ""] {
            assert!(matches!(
                parse_base_datetime(input),
                Err(TimestampError::InvalidDatetime { .. })
            ));
        }
    }

    #[test]
    fn test_timestamp_for_steps() {
        let plan = TimestampPlan::new(base(), 5).unwrap();
        assert_eq!(plan.timestamp_for(0).unwrap(), base());
        assert_eq!(
            plan.timestamp_for(3).unwrap(),
            base() + Duration::seconds(15)
        );
    }

    #[test]
    fn test_timestamp_crosses_midnight() {
        let late = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let plan = TimestampPlan::new(late, 1).unwrap();
        assert_eq!(
            plan.timestamp_for(1).unwrap().to_string(),
            "2025-01-01 00:00:00"
        );
    }

    #[test]
    fn test_zero_step_rejected() {
        assert!(matches!(
            TimestampPlan::new(base(), 0),
            Err(TimestampError::InvalidStep(0))
        ));
    }

    #[test]
    fn test_overflow_detected() {
        let plan = TimestampPlan::new(NaiveDateTime::MAX, 1).unwrap();
        assert!(plan.validate_len(1).is_ok());
        assert!(matches!(
            plan.validate_len(2),
            Err(TimestampError::Overflow { index: 1 })
        ));
    }
}
