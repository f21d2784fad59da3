use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

/// Answers "what day is it" in the application time zone.
#[derive(Debug, Clone)]
pub struct Clock {
    tz: TimeZone,
    fixed: Option<Date>,
}

impl Clock {
    pub fn new(tz: TimeZone) -> Self {
        Self { tz, fixed: None }
    }

    /// A clock that is always on `date`.
    pub fn fixed(date: Date) -> Self {
        Self {
            tz: TimeZone::UTC,
            fixed: Some(date),
        }
    }

    pub fn today(&self) -> Date {
        self.fixed
            .unwrap_or_else(|| Timestamp::now().to_zoned(self.tz.clone()).date())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(TimeZone::UTC)
    }
}
