//! Weight trend using linear regression (linfa)

use chrono::{DateTime, FixedOffset};
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};

use super::parse_weight;
use crate::logs::LogEntry;

/// Minimum dated weight samples required for fitting
const MIN_DATA_POINTS: usize = 3;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Linear fit of weight over days since the first sample
#[derive(Debug, Clone)]
pub struct WeightTrend {
    slope: f64,
    intercept: f64,
    r2_score: f64,
    data_points: usize,
    last_day: f64,
}

impl WeightTrend {
    /// Fit on entries that carry both a parseable date and a weight
    pub fn fit(entries: &[LogEntry]) -> Option<Self> {
        let samples: Vec<(DateTime<FixedOffset>, f64)> = entries
            .iter()
            .filter_map(|e| {
                let date = DateTime::parse_from_rfc3339(&e.date).ok()?;
                Some((date, parse_weight(&e.weight)?))
            })
            .collect();

        if samples.len() < MIN_DATA_POINTS {
            return None;
        }

        let first_date = samples.iter().map(|(d, _)| *d).min()?;

        // X = days since first sample, Y = weight
        let x_data: Vec<f64> = samples
            .iter()
            .map(|(d, _)| (*d - first_date).num_seconds() as f64 / SECONDS_PER_DAY)
            .collect();
        let y_data: Vec<f64> = samples.iter().map(|(_, w)| *w).collect();

        let n_samples = x_data.len();
        let last_day = x_data.iter().copied().fold(0.0, f64::max);

        let records = Array2::from_shape_vec((n_samples, 1), x_data).ok()?;
        let targets = Array1::from_vec(y_data);
        let dataset = Dataset::new(records, targets);

        let model = LinearRegression::default().fit(&dataset).ok()?;

        let slope = model.params()[0];
        let intercept = model.intercept();
        if !slope.is_finite() || !intercept.is_finite() {
            return None;
        }

        let predictions = model.predict(&dataset);
        let r2_score = predictions.r2(&dataset).unwrap_or(0.0);

        Some(Self {
            slope,
            intercept,
            r2_score,
            data_points: n_samples,
            last_day,
        })
    }

    /// Weight change per day
    pub fn daily_progress(&self) -> f64 {
        self.slope
    }

    pub fn weekly_progress(&self) -> f64 {
        self.slope * 7.0
    }

    /// Get R2 score (model fit quality, 0-1)
    pub fn r2_score(&self) -> f64 {
        self.r2_score
    }

    pub fn data_points(&self) -> usize {
        self.data_points
    }

    /// Projected weight `days_ahead` days after the last sample
    pub fn project(&self, days_ahead: f64) -> f64 {
        self.slope * (self.last_day + days_ahead) + self.intercept
    }

    /// Format trend for CLI output
    pub fn format(&self) -> String {
        let weekly = self.weekly_progress();
        let sign = if weekly >= 0.0 { "+" } else { "" };
        format!(
            "Tendencia: {}{:.2} kg/semana (R² {:.2}, {} registros), en 4 semanas: {:.1} kg",
            sign,
            weekly,
            self.r2_score,
            self.data_points,
            self.project(28.0)
        )
    }
}
