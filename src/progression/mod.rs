//! Progression module - weight statistics and chart series from log history
//!
//! Histories are taken in insertion order. Nothing here sorts by date, so
//! "current" is the last logged entry, not the most recent calendar date.

pub mod trend;

pub use trend::WeightTrend;

use chrono::DateTime;

use crate::logs::LogEntry;

/// Summary of logged weights for one exercise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStats {
    pub current: f64,
    pub max: f64,
    pub min: f64,
}

/// One chart point
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: String,
    pub weight: f64,
}

/// Parse the leading number of a logged weight ("60kg" -> 60).
/// Blank input or no leading digits gives `None`.
pub fn parse_weight(raw: &str) -> Option<f64> {
    let raw = raw.trim().replace(',', ".");

    let end = raw
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    // longest prefix that parses ("60.5.1" -> 60.5)
    let mut prefix = &raw[..end];
    while !prefix.is_empty() {
        if let Ok(w) = prefix.parse::<f64>() {
            return Some(w).filter(|w| w.is_finite());
        }
        prefix = &prefix[..prefix.len() - 1];
    }
    None
}

/// Day/month label for a chart axis ("05/03")
pub fn format_day_month(date: &str) -> String {
    match DateTime::parse_from_rfc3339(date) {
        Ok(d) => d.format("%d/%m").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn compute_stats(entries: &[LogEntry]) -> Option<ProgressStats> {
    let weights: Vec<f64> = entries
        .iter()
        .filter_map(|e| parse_weight(&e.weight))
        .collect();

    let current = *weights.last()?;
    let max = weights.iter().copied().fold(f64::MIN, f64::max);
    let min = weights.iter().copied().fold(f64::MAX, f64::min);

    Some(ProgressStats { current, max, min })
}

pub fn build_series(entries: &[LogEntry]) -> Vec<SeriesPoint> {
    entries
        .iter()
        .map(|e| SeriesPoint {
            date: format_day_month(&e.date),
            weight: parse_weight(&e.weight).unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, weight: &str) -> LogEntry {
        LogEntry {
            date: date.to_string(),
            weight: weight.to_string(),
            reps: "10".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(compute_stats(&[]), None);
    }

    #[test]
    fn test_stats_all_blank() {
        let entries = vec![
            entry("2024-03-01T10:00:00.000Z", ""),
            entry("2024-03-02T10:00:00.000Z", "  "),
        ];
        assert_eq!(compute_stats(&entries), None);
    }

    #[test]
    fn test_stats_single() {
        let stats = compute_stats(&[entry("2024-03-01T10:00:00.000Z", "60")]).unwrap();
        assert_eq!(stats, ProgressStats { current: 60.0, max: 60.0, min: 60.0 });
    }

    #[test]
    fn test_current_is_last_not_max() {
        let entries = vec![
            entry("2024-03-01T10:00:00.000Z", "80"),
            entry("2024-03-08T10:00:00.000Z", "70"),
        ];
        let stats = compute_stats(&entries).unwrap();
        assert_eq!(stats.current, 70.0);
        assert_eq!(stats.max, 80.0);
    }

    #[test]
    fn test_scenario_60_then_70() {
        let entries = vec![
            entry("2024-03-01T10:00:00.000Z", "60"),
            entry("2024-03-08T10:00:00.000Z", "70"),
        ];

        let stats = compute_stats(&entries).unwrap();
        assert_eq!(stats, ProgressStats { current: 70.0, max: 70.0, min: 60.0 });

        let weights: Vec<_> = build_series(&entries).iter().map(|p| p.weight).collect();
        assert_eq!(weights, vec![60.0, 70.0]);
    }

    #[test]
    fn test_stats_skip_blank_keep_order() {
        let entries = vec![
            entry("2024-03-01T10:00:00.000Z", "50"),
            entry("2024-03-05T10:00:00.000Z", "65.5"),
            entry("2024-03-09T10:00:00.000Z", ""),
        ];
        let stats = compute_stats(&entries).unwrap();
        assert_eq!(stats.current, 65.5);
        assert_eq!(stats.min, 50.0);
    }

    #[test]
    fn test_insertion_order_trusted_over_dates() {
        let entries = vec![
            entry("2024-03-10T10:00:00.000Z", "90"),
            entry("2024-03-01T10:00:00.000Z", "75"),
        ];
        assert_eq!(compute_stats(&entries).unwrap().current, 75.0);
    }

    #[test]
    fn test_series_keeps_every_entry() {
        let entries = vec![
            entry("2024-03-05T10:00:00.000Z", "60"),
            entry("2024-03-12T10:00:00.000Z", ""),
            entry("2024-03-19T10:00:00.000Z", "abc"),
            entry("2024-03-26T10:00:00.000Z", "62,5"),
        ];
        let series = build_series(&entries);
        assert_eq!(series.len(), entries.len());
        assert_eq!(series[0], SeriesPoint { date: "05/03".to_string(), weight: 60.0 });
        assert_eq!(series[1].weight, 0.0);
        assert_eq!(series[2].weight, 0.0);
        assert_eq!(series[3].weight, 62.5);
    }

    #[test]
    fn test_series_empty() {
        assert!(build_series(&[]).is_empty());
    }

    #[test]
    fn test_series_bad_date_kept_raw() {
        let series = build_series(&[entry("yesterday", "40")]);
        assert_eq!(series[0].date, "yesterday");
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("60"), Some(60.0));
        assert_eq!(parse_weight(" 72.5 "), Some(72.5));
        assert_eq!(parse_weight("72,5"), Some(72.5));
        assert_eq!(parse_weight(""), None);
        assert_eq!(parse_weight("heavy"), None);
        assert_eq!(parse_weight("NaN"), None);
    }

    #[test]
    fn test_parse_weight_leading_number() {
        assert_eq!(parse_weight("60kg"), Some(60.0));
        assert_eq!(parse_weight("80 kg"), Some(80.0));
        assert_eq!(parse_weight("62,5kg"), Some(62.5));
        assert_eq!(parse_weight("60.5.1"), Some(60.5));
        assert_eq!(parse_weight("-"), None);
        assert_eq!(parse_weight("kg 60"), None);
    }

    #[test]
    fn test_weight_with_unit_suffix() {
        let entries = vec![
            entry("2024-03-01T10:00:00.000Z", "60kg"),
            entry("2024-03-08T10:00:00.000Z", "70"),
        ];
        let stats = compute_stats(&entries).unwrap();
        assert_eq!(stats, ProgressStats { current: 70.0, max: 70.0, min: 60.0 });
        assert_eq!(build_series(&entries)[0].weight, 60.0);
    }
}
