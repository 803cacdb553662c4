// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matches get sorted, cut, and turned into percentages.
//!
//! Ranking is by floored score, descending. There is no secondary key: two
//! diseases with the same score stay in knowledge base order. That only holds
//! because `sort_by` is stable and the comparator returns `Equal` for equal
//! scores. Swap in `sort_unstable_by` and the output order of ties becomes
//! arbitrary.
//!
//! After the cut to the top [`MAX_RESULTS`], each score becomes its share of the
//! kept total. Percentages then sum to 100 give or take one point per entry of
//! rounding.

use super::core::share_percentage;
use crate::types::MatchResult;
use std::cmp::Ordering;

/// How many results an analysis reports.
pub const MAX_RESULTS: usize = 5;

/// Compare two results for ranking: higher floored score first.
///
/// Equal scores compare `Equal` so a stable sort keeps their relative order.
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.raw_score.cmp(&a.raw_score)
}

/// Sort, cut to [`MAX_RESULTS`], and normalize percentages in place.
///
/// Input must be in knowledge base order. `raw_score` is left untouched so
/// callers can still see what the ranking was based on.
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(compare_results);
    results.truncate(MAX_RESULTS);
    normalize_percentages(&mut results);
    results
}

/// Replace each percentage with the result's share of the combined raw score.
///
/// A zero total can't happen after the `score > 0` filter, but if it does the
/// percentages are left as they were.
pub fn normalize_percentages(results: &mut [MatchResult]) {
    let total: u64 = results.iter().map(|r| u64::from(r.raw_score)).sum();
    if total == 0 {
        return;
    }
    for result in results.iter_mut() {
        result.percentage = share_percentage(u64::from(result.raw_score), total);
    }
}
