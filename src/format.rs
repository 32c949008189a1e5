//! Display formatting for analysis results and statistics

use chrono::{DateTime, Local, NaiveDateTime};

const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

pub fn nanoseconds_to_milliseconds(nanoseconds: i64) -> f64 {
    nanoseconds as f64 / NANOS_PER_MILLI
}

pub fn nanoseconds_to_seconds(nanoseconds: i64) -> f64 {
    nanoseconds as f64 / NANOS_PER_SEC
}

pub fn milliseconds_to_seconds(milliseconds: f64) -> f64 {
    milliseconds / 1_000.0
}

/// Compact count: `1.5M`, `2.3K`, or the plain number
pub fn format_number(value: u64) -> String {
    let value = value as f64;
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Ratio in `[0, 1]` as a percentage with one decimal
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Nanosecond duration in the largest readable unit
pub fn format_duration(nanoseconds: i64) -> String {
    let seconds = nanoseconds_to_seconds(nanoseconds);

    if seconds < 0.001 {
        format!("{:.0}µs", nanoseconds as f64 / 1_000.0)
    } else if seconds < 1.0 {
        format!("{:.0}ms", nanoseconds_to_milliseconds(nanoseconds))
    } else if seconds < 60.0 {
        format!("{:.2}s", seconds)
    } else {
        let minutes = (seconds / 60.0).floor();
        let remaining = seconds % 60.0;
        format!("{}m {:.1}s", minutes, remaining)
    }
}

pub fn format_tokens_per_second(rate: f64) -> String {
    if rate >= 1_000.0 {
        format!("{:.1}K t/s", rate / 1_000.0)
    } else {
        format!("{:.1} t/s", rate)
    }
}

/// Render a server timestamp in local time.
///
/// Timestamps without an offset are taken as already local. Values that do
/// not parse are shown unchanged.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let Some(timestamp) = timestamp.filter(|t| !t.is_empty()) else {
        return "N/A".to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    match NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Whole-number percentage, as shown on score badges
pub fn format_score(score: f64) -> String {
    format!("{}%", (score * 100.0).round())
}

/// Qualitative band for credibility and confidence scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ScoreBand::High
        } else if score >= 0.6 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::High => "High",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::Low => "Low",
        }
    }

    /// Theme color variable for badges and borders
    pub fn color_var(&self) -> &'static str {
        match self {
            ScoreBand::High => "var(--success)",
            ScoreBand::Moderate => "var(--warning)",
            ScoreBand::Low => "var(--error)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(nanoseconds_to_milliseconds(2_500_000), 2.5);
        assert_eq!(nanoseconds_to_seconds(3_000_000_000), 3.0);
        assert_eq!(milliseconds_to_seconds(1_500.0), 1.5);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_300_000), "2.3M");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.123), "12.3%");
        assert_eq!(format_percentage(1.0), "100.0%");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(450_000), "450µs");
        assert_eq!(format_duration(12_000_000), "12ms");
        assert_eq!(format_duration(1_500_000_000), "1.50s");
        assert_eq!(format_duration(123_000_000_000), "2m 3.0s");
    }

    #[test]
    fn test_format_tokens_per_second() {
        assert_eq!(format_tokens_per_second(12.34), "12.3 t/s");
        assert_eq!(format_tokens_per_second(1_500.0), "1.5K t/s");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(None), "N/A");
        assert_eq!(format_timestamp(Some("")), "N/A");
        assert_eq!(
            format_timestamp(Some("2025-03-01T14:05:09.123456")),
            "2025-03-01 14:05:09"
        );
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");

        let expected = DateTime::parse_from_rfc3339("2025-03-01T14:05:09Z")
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(format_timestamp(Some("2025-03-01T14:05:09Z")), expected);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(0.8), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(0.79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(0.6), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(0.59).label(), "Low");
        assert_eq!(format_score(0.856), "86%");
    }
}
