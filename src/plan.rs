//! Training plan model and catalog enrichment

use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::exercises::Language;
use crate::matcher::match_exercise;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercise {
    pub id: String,
    pub name: String,
    pub sets: String,
    pub reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
    /// Set once, never overwritten by enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_media_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub exercises: Vec<PlanExercise>,
}

/// Days keyed by day id; key order is display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    pub days: IndexMap<String, PlanDay>,
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid plan document: {0}")]
    Json(#[from] serde_json::Error),
}

impl Plan {
    pub fn from_json(raw: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlanError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn exercises(&self) -> impl Iterator<Item = &PlanExercise> {
        self.days.values().flat_map(|d| d.exercises.iter())
    }
}

/// Aggregate catalog coverage of a plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingStats {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub match_rate: f64,
}

/// Attach the catalog media id to one exercise, unless it already has one
pub fn enrich_exercise(exercise: &PlanExercise, language: Language) -> PlanExercise {
    if exercise.external_media_id.is_some() {
        return exercise.clone();
    }

    match match_exercise(&exercise.name, language) {
        Some(entry) => PlanExercise {
            external_media_id: Some(entry.external_media_id.to_string()),
            ..exercise.clone()
        },
        None => exercise.clone(),
    }
}

pub fn enrich_plan(plan: &Plan, language: Language) -> Plan {
    let days = plan
        .days
        .iter()
        .map(|(key, day)| {
            let exercises = day
                .exercises
                .iter()
                .map(|e| enrich_exercise(e, language))
                .collect();
            (key.clone(), PlanDay { exercises, ..day.clone() })
        })
        .collect();

    let enriched = Plan { days };
    let stats = matching_stats(&enriched);
    debug!(
        "Enriched plan ({}): {}/{} exercises matched",
        language, stats.matched, stats.total
    );
    enriched
}

pub fn matching_stats(plan: &Plan) -> MatchingStats {
    let total = plan.exercises().count();
    let matched = plan
        .exercises()
        .filter(|e| e.external_media_id.is_some())
        .count();

    let match_rate = if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    };

    MatchingStats {
        total,
        matched,
        unmatched: total - matched,
        match_rate,
    }
}

pub fn collect_media_ids(plan: &Plan) -> BTreeSet<String> {
    plan.exercises()
        .filter_map(|e| e.external_media_id.clone())
        .collect()
}
