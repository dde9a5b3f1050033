//! Chapter weightage prediction.
//!
//! Forecasts a normalized percentage distribution over chapters from
//! multi-year historical weight data, using a linear recency weighting:
//! for years `[2023, 2022, 2021]` the weights are `[3, 2, 1]`.
//!
//! The chapter universe is taken from the most recent year only. Chapters
//! absent from older years default to 0; chapters absent from the latest
//! year are excluded entirely even if older years carry them. That
//! asymmetry is intentional behavior of the source data model and is
//! preserved as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Mathematics];
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Mathematics => "Mathematics",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "physics" => Ok(Subject::Physics),
            "chemistry" => Ok(Subject::Chemistry),
            "mathematics" | "maths" | "math" => Ok(Subject::Mathematics),
            other => Err(format!("unknown subject: {other}")),
        }
    }
}

/// Per-year `(chapter name, observed percentage weight)` pairs, kept in
/// the order the source tables list them.
pub type ChapterWeights = Vec<(String, f64)>;

fn chapter_value(weights: &ChapterWeights, name: &str) -> f64 {
    weights
        .iter()
        .find(|(chapter, _)| chapter == name)
        .map(|(_, value)| *value)
        .unwrap_or(0.0)
}

/// One forecast entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterWeightage {
    pub name: String,
    pub value: f64,
}

/// Read-only reference data: subject -> year label -> chapter -> weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalWeightage {
    by_subject: BTreeMap<Subject, BTreeMap<String, ChapterWeights>>,
}

impl HistoricalWeightage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_year(&mut self, subject: Subject, year: &str, weights: ChapterWeights) {
        self.by_subject
            .entry(subject)
            .or_default()
            .insert(year.to_string(), weights);
    }

    /// Year labels for a subject, most recent first.
    pub fn years(&self, subject: Subject) -> Vec<&str> {
        self.by_subject
            .get(&subject)
            .map(|years| years.keys().rev().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Forecast a normalized weightage distribution for `subject`.
    ///
    /// Entries sum to 100 (within floating-point rounding) and enumerate
    /// the latest year's chapters in the order that year lists them. A
    /// subject with a single year of data returns that year's values
    /// normalized to 100. If every weighted average is zero the values
    /// are returned unnormalized rather than dividing by zero.
    pub fn predict(&self, subject: Subject) -> Vec<ChapterWeightage> {
        let Some(subject_data) = self.by_subject.get(&subject) else {
            return Vec::new();
        };
        // Year labels sort lexicographically; reverse for most-recent-first.
        let years: Vec<&String> = subject_data.keys().rev().collect();
        let Some(latest) = years.first() else {
            return Vec::new();
        };

        let mut predictions: Vec<ChapterWeightage> = subject_data[*latest]
            .iter()
            .map(|(chapter, _)| {
                let mut total_weight = 0.0;
                let mut total_value = 0.0;
                for (index, year) in years.iter().enumerate() {
                    let weight = (years.len() - index) as f64;
                    let value = chapter_value(&subject_data[*year], chapter);
                    total_weight += weight;
                    total_value += value * weight;
                }
                ChapterWeightage {
                    name: chapter.clone(),
                    value: total_value / total_weight,
                }
            })
            .collect();

        let total: f64 = predictions.iter().map(|p| p.value).sum();
        if total > f64::EPSILON {
            for p in &mut predictions {
                p.value = p.value / total * 100.0;
            }
        }
        predictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn weights(entries: &[(&str, f64)]) -> ChapterWeights {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    fn sample_data() -> HistoricalWeightage {
        let mut data = HistoricalWeightage::new();
        data.insert_year(
            Subject::Physics,
            "2023",
            weights(&[("Kinematics", 8.0), ("Optics", 12.0), ("Waves", 5.0)]),
        );
        data.insert_year(
            Subject::Physics,
            "2022",
            weights(&[("Kinematics", 7.0), ("Optics", 11.0), ("Thermo", 6.0)]),
        );
        data.insert_year(
            Subject::Physics,
            "2021",
            weights(&[("Kinematics", 9.0), ("Optics", 9.0)]),
        );
        data
    }

    #[test]
    fn output_sums_to_100() {
        let total: f64 = sample_data()
            .predict(Subject::Physics)
            .iter()
            .map(|p| p.value)
            .sum();
        assert!((total - 100.0).abs() < 0.01);
    }

    #[test]
    fn universe_comes_from_latest_year_only() {
        let names: Vec<String> = sample_data()
            .predict(Subject::Physics)
            .into_iter()
            .map(|p| p.name)
            .collect();
        // "Thermo" only exists in 2022 and is excluded; "Waves" only in
        // 2023 and is kept (older years contribute 0 for it).
        assert_eq!(names, vec!["Kinematics", "Optics", "Waves"]);
    }

    #[test]
    fn forecast_preserves_authored_chapter_order() {
        let mut data = HistoricalWeightage::new();
        data.insert_year(
            Subject::Physics,
            "2023",
            weights(&[("Waves", 5.0), ("Kinematics", 8.0), ("Optics", 12.0)]),
        );
        data.insert_year(
            Subject::Physics,
            "2022",
            weights(&[("Optics", 11.0), ("Kinematics", 7.0)]),
        );
        let names: Vec<String> = data
            .predict(Subject::Physics)
            .into_iter()
            .map(|p| p.name)
            .collect();
        // The latest year's listing order wins, not alphabetical order.
        assert_eq!(names, vec!["Waves", "Kinematics", "Optics"]);
    }

    #[test]
    fn recency_weights_favor_recent_years() {
        let predictions = sample_data().predict(Subject::Physics);
        let kinematics = predictions.iter().find(|p| p.name == "Kinematics").unwrap();
        // Weighted average before normalization: (8*3 + 7*2 + 9*1) / 6.
        let expected_raw = (8.0 * 3.0 + 7.0 * 2.0 + 9.0) / 6.0;
        let raw_total = expected_raw
            + (12.0 * 3.0 + 11.0 * 2.0 + 9.0) / 6.0
            + (5.0 * 3.0) / 6.0;
        assert!((kinematics.value - expected_raw / raw_total * 100.0).abs() < 1e-9);
    }

    #[test]
    fn single_year_is_normalized() {
        let mut data = HistoricalWeightage::new();
        data.insert_year(
            Subject::Chemistry,
            "2023",
            weights(&[("Bonding", 3.0), ("Equilibrium", 1.0)]),
        );
        let predictions = data.predict(Subject::Chemistry);
        assert_eq!(predictions[0].value, 75.0);
        assert_eq!(predictions[1].value, 25.0);
    }

    #[test]
    fn unknown_subject_yields_empty_forecast() {
        let data = HistoricalWeightage::new();
        assert!(data.predict(Subject::Mathematics).is_empty());
    }

    #[test]
    fn all_zero_weights_do_not_divide_by_zero() {
        let mut data = HistoricalWeightage::new();
        data.insert_year(Subject::Physics, "2023", weights(&[("Kinematics", 0.0)]));
        let predictions = data.predict(Subject::Physics);
        assert_eq!(predictions[0].value, 0.0);
    }

    proptest! {
        #[test]
        fn normalization_property(
            values in proptest::collection::vec(0.1f64..50.0, 1..12)
        ) {
            let mut data = HistoricalWeightage::new();
            let table: ChapterWeights = values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("Chapter {i:02}"), *v))
                .collect();
            data.insert_year(Subject::Mathematics, "2024", table.clone());
            data.insert_year(Subject::Mathematics, "2023", table);

            let predictions = data.predict(Subject::Mathematics);
            prop_assert_eq!(predictions.len(), values.len());
            let total: f64 = predictions.iter().map(|p| p.value).sum();
            prop_assert!((total - 100.0).abs() < 0.01);
        }
    }
}
