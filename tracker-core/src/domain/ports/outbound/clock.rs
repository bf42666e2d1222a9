use time::{Date, OffsetDateTime};

/// Source of the current calendar date.
pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> Date;
}

/// Reads the system clock, in the local offset when it can be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
