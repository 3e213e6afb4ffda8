//! Evaluation scores averaged per category and drawn as radar charts.

use serde::Serialize;
use std::collections::BTreeMap;

use super::records::Evaluation;
use crate::domain::charts::{render_radar_chart, ChartError, RadarChart};

pub const NO_EVALUATIONS_NOTICE: &str = "No evaluations found.";

/// Maximum charts per grid row.
const MAX_CHARTS_PER_ROW: usize = 3;

/// Averages of one category, subcategories sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverages {
    pub category: String,
    pub subcategories: Vec<String>,
    pub averages: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationScores {
    pub charts: Vec<RadarChart>,
    pub charts_per_row: usize,
    pub notice: Option<&'static str>,
}

/// Groups scores by category, in order of first appearance, and averages
/// every subcategory across evaluations.
pub fn average_scores(evaluations: &[Evaluation]) -> Vec<CategoryAverages> {
    let mut groups: Vec<(String, BTreeMap<String, Vec<f64>>)> = Vec::new();

    for evaluation in evaluations {
        for (category, sub_scores) in evaluation.scores.iter() {
            let idx = match groups.iter().position(|(name, _)| name == category) {
                Some(idx) => idx,
                None => {
                    groups.push((category.to_string(), BTreeMap::new()));
                    groups.len() - 1
                }
            };
            let samples = &mut groups[idx].1;
            for (sub, score) in sub_scores.iter() {
                samples.entry(sub.to_string()).or_default().push(*score);
            }
        }
    }

    groups
        .into_iter()
        .map(|(category, samples)| {
            let (subcategories, averages) = samples
                .into_iter()
                .map(|(sub, scores)| (sub, mean(&scores)))
                .unzip();
            CategoryAverages {
                category,
                subcategories,
                averages,
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// One radar chart per category.
///
/// # Errors
///
/// - `ChartError` if a chart cannot be built
pub fn evaluation_scores(evaluations: &[Evaluation]) -> Result<EvaluationScores, ChartError> {
    let charts = average_scores(evaluations)
        .iter()
        .map(|c| render_radar_chart(&c.averages, &c.subcategories, &c.category))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EvaluationScores {
        charts_per_row: charts.len().min(MAX_CHARTS_PER_ROW),
        notice: evaluations.is_empty().then_some(NO_EVALUATIONS_NOTICE),
        charts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::library::records::OrderedMap;

    fn eval(scores: Vec<(&str, Vec<(&str, f64)>)>) -> Evaluation {
        Evaluation {
            question_id: "q".into(),
            scores: OrderedMap(
                scores
                    .into_iter()
                    .map(|(c, subs)| {
                        (
                            c.to_string(),
                            OrderedMap(subs.into_iter().map(|(s, v)| (s.to_string(), v)).collect()),
                        )
                    })
                    .collect(),
            ),
            feedback: None,
        }
    }

    #[test]
    fn categories_keep_first_appearance_and_subcategories_sort() {
        let evals = vec![
            eval(vec![("safety", vec![("toxicity", 0.2), ("harm", 0.4)])]),
            eval(vec![("fairness", vec![("gender", 0.5)]), ("safety", vec![("harm", 0.6)])]),
        ];
        let avg = average_scores(&evals);
        assert_eq!(avg[0].category, "safety");
        assert_eq!(avg[1].category, "fairness");
        assert_eq!(avg[0].subcategories, vec!["harm", "toxicity"]);
        assert!((avg[0].averages[0] - 0.5).abs() < 1e-9);
        assert!((avg[0].averages[1] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn charts_per_row_is_capped_at_three() {
        let evals = vec![eval(vec![
            ("a", vec![("x", 0.1)]),
            ("b", vec![("x", 0.1)]),
            ("c", vec![("x", 0.1)]),
            ("d", vec![("x", 0.1)]),
        ])];
        let scores = evaluation_scores(&evals).unwrap();
        assert_eq!(scores.charts.len(), 4);
        assert_eq!(scores.charts_per_row, 3);
        assert_eq!(scores.charts[3].title, "d");
    }

    #[test]
    fn single_category_uses_one_column() {
        let scores = evaluation_scores(&[eval(vec![("a", vec![("x", 0.1)])])]).unwrap();
        assert_eq!(scores.charts_per_row, 1);
        assert_eq!(scores.notice, None);
    }

    #[test]
    fn empty_evaluations_have_notice() {
        let scores = evaluation_scores(&[]).unwrap();
        assert!(scores.charts.is_empty());
        assert_eq!(scores.notice, Some(NO_EVALUATIONS_NOTICE));
    }

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }
}
