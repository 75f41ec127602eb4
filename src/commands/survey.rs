//! Survey the root word pool
//!
//! Runs the solutions search for many root words and summarises how rich each
//! root is, to spot roots that make for dull rounds.

use super::solutions::find_solutions;
use crate::validator::WordListDictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Solutions found for one root word
#[derive(Debug, Clone)]
pub struct RootSummary {
    pub root: String,
    pub solutions: usize,
    pub max_score: u32,
}

/// Statistics over all surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    /// Richest roots first
    pub roots: Vec<RootSummary>,
    pub total_time: Duration,
    pub average_solutions: f64,
    pub average_max_score: f64,
    /// Roots with no acceptable words at all
    pub barren: usize,
}

impl SurveyStatistics {
    #[must_use]
    pub fn richest(&self) -> Option<&RootSummary> {
        self.roots.first()
    }

    #[must_use]
    pub fn poorest(&self) -> Option<&RootSummary> {
        self.roots.last()
    }
}

/// Survey the first `limit` roots of `pool` (all of them if `None`)
#[must_use]
pub fn run_survey(
    pool: &[String],
    dictionary: &WordListDictionary,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyStatistics {
    let roots = &pool[..limit.unwrap_or(pool.len()).min(pool.len())];

    let pb = if show_progress {
        ProgressBar::new(roots.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let mut summaries: Vec<RootSummary> = roots
        .par_iter()
        .map(|root| {
            let result = find_solutions(root, dictionary);
            pb.inc(1);
            RootSummary {
                root: result.root,
                solutions: result.words.len(),
                max_score: result.max_score,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    summaries.sort_by(|a, b| {
        b.solutions
            .cmp(&a.solutions)
            .then_with(|| a.root.cmp(&b.root))
    });

    let count = summaries.len().max(1) as f64;
    let total_solutions: usize = summaries.iter().map(|s| s.solutions).sum();
    let total_max_score: f64 = summaries.iter().map(|s| f64::from(s.max_score)).sum();
    let average_solutions = total_solutions as f64 / count;
    let average_max_score = total_max_score / count;
    let barren = summaries.iter().filter(|s| s.solutions == 0).count();

    SurveyStatistics {
        roots: summaries,
        total_time,
        average_solutions,
        average_max_score,
        barren,
    }
}
