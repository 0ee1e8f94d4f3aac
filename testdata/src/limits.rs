//! Absolute limits of each data domain.
//!
//! Dates, times and dates with times are expressed as step indexes: days
//! from the common era, seconds from midnight and Unix timestamps.

pub struct LongLimits;

impl LongLimits {
    pub const MIN: i64 = i64::MIN;
    pub const MAX: i64 = i64::MAX;
}

pub struct DoubleLimits;

impl DoubleLimits {
    pub const MIN: f64 = f64::MIN;
    pub const MAX: f64 = f64::MAX;
    /// Default distance between neighbouring real values.
    pub const DELTA: f64 = 0.01;
}

pub struct StringLimits;

impl StringLimits {
    pub const MIN_LENGTH: usize = 0;
    pub const MAX_LENGTH: usize = 10_000;
}

pub struct DateLimits;

impl DateLimits {
    /// 0001-01-01
    pub const MIN_DAYS_FROM_CE: i32 = 1;
    /// 9999-12-31
    pub const MAX_DAYS_FROM_CE: i32 = 3_652_059;
}

pub struct TimeLimits;

impl TimeLimits {
    /// 00:00:00
    pub const MIN_SECONDS: u32 = 0;
    /// 23:59:59
    pub const MAX_SECONDS: u32 = 86_399;
}

pub struct DateTimeLimits;

impl DateTimeLimits {
    /// 0001-01-01 00:00:00
    pub const MIN_TIMESTAMP: i64 = -62_135_596_800;
    /// 9999-12-31 23:59:59
    pub const MAX_TIMESTAMP: i64 = 253_402_300_799;
}
