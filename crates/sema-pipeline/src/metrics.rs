//! Ranked retrieval metrics
//!
//! Evaluates ranked result lists against relevance judgments: precision,
//! recall, average precision, and NDCG. Relevance is binary (1.0) for the
//! precision family and graded for NDCG.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ranked search result with its relevance judgment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    /// Result title or identifier
    pub title: String,

    /// Relevance judgment; 1.0 counts as relevant for precision/recall
    pub relevance: f64,
}

/// Evaluation report for one ranked result list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricReport {
    pub precision: f64,
    pub recall: f64,
    pub average_precision: f64,
    pub ndcg: f64,
    pub result_count: usize,
    pub generated_at: DateTime<Utc>,
}

fn is_relevant(result: &RankedResult) -> bool {
    result.relevance == 1.0
}

/// Precision and recall given the total number of relevant documents
pub fn precision_recall(results: &[RankedResult], expected_relevant: usize) -> (f64, f64) {
    if results.is_empty() || expected_relevant == 0 {
        return (0.0, 0.0);
    }

    let relevant = results.iter().filter(|r| is_relevant(r)).count();
    let precision = relevant as f64 / results.len() as f64;
    let recall = relevant as f64 / expected_relevant as f64;
    (precision, recall)
}

/// Average precision over the ranking
pub fn average_precision(results: &[RankedResult]) -> f64 {
    let relevant_total = results.iter().filter(|r| is_relevant(r)).count();
    if relevant_total == 0 {
        return 0.0;
    }

    let mut running_sum = 0.0;
    let mut relevant_so_far = 0usize;
    for (i, result) in results.iter().enumerate() {
        if is_relevant(result) {
            relevant_so_far += 1;
            running_sum += relevant_so_far as f64 / (i + 1) as f64;
        }
    }

    running_sum / relevant_total as f64
}

/// Normalized discounted cumulative gain
pub fn ndcg(results: &[RankedResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }

    let scores: Vec<f64> = results.iter().map(|r| r.relevance).collect();
    let mut ideal = scores.clone();
    ideal.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let dcg = discounted_gain(&scores);
    let idcg = discounted_gain(&ideal);
    if idcg > 0.0 {
        dcg / idcg
    } else {
        0.0
    }
}

fn discounted_gain(scores: &[f64]) -> f64 {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| if i == 0 { *score } else { score / (i + 1) as f64 })
        .sum()
}

/// Full evaluation of one ranked result list
pub fn evaluate(results: &[RankedResult], expected_relevant: usize) -> MetricReport {
    let (precision, recall) = precision_recall(results, expected_relevant);

    MetricReport {
        precision,
        recall,
        average_precision: average_precision(results),
        ndcg: ndcg(results),
        result_count: results.len(),
        generated_at: Utc::now(),
    }
}
