use chrono::{Local, NaiveDate, Utc};

/// Resolves "today" for new entries and today-scoped queries.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Where one business day ends and the next begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayBoundary {
    #[default]
    Utc,
    Local,
}

impl DayBoundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayBoundary::Utc => "utc",
            DayBoundary::Local => "local",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "utc" => Some(DayBoundary::Utc),
            "local" => Some(DayBoundary::Local),
            _ => None,
        }
    }
}

impl std::fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub boundary: DayBoundary,
}

impl SystemClock {
    pub fn new(boundary: DayBoundary) -> Self {
        Self { boundary }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.boundary {
            DayBoundary::Utc => Utc::now().date_naive(),
            DayBoundary::Local => Local::now().date_naive(),
        }
    }
}

/// Always reports the same day. Used by tests and scripted sessions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_boundary_roundtrip() {
        for boundary in [DayBoundary::Utc, DayBoundary::Local] {
            assert_eq!(DayBoundary::from_str(boundary.as_str()), Some(boundary));
        }
        assert_eq!(DayBoundary::from_str("UTC"), Some(DayBoundary::Utc));
        assert_eq!(DayBoundary::from_str("mars"), None);
    }

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(FixedClock(day).today(), day);
    }
}
