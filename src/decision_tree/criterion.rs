//! Defines the information-gain splitting criterion.

use rayon::prelude::*;

use crate::Sample;
use super::partition::partition;
use super::split_rule::SplitRule;

use std::cmp::Ordering;


/// Score for a splitting.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug)]
struct Score(f64);


impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}


impl PartialEq for Score {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}


impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}


/// Compute the Shannon entropy (base 2) of the label vector `y`
/// from the counts of its distinct values.
///
/// Returns `H(y) = - Σ_v p(y = v) · log2(p(y = v))`.
/// A vector with a single distinct value yields exactly `0`;
/// the `p · log2(p)` term is guarded so that
/// a vanishing probability contributes `0` rather than a NaN.
/// An empty `y` is a caller precondition.
pub fn entropy(y: &[i64]) -> f64 {
    let n = y.len() as f64;

    partition(y).into_iter()
        .map(|(_, indices)| {
            let p = indices.len() as f64 / n;
            if p <= 0f64 { 0f64 } else { -p * p.log2() }
        })
        .sum::<f64>()
}


/// Compute the information gain of every candidate binary split
/// on the column `x` against the labels `y`.
///
/// For each distinct value `v` of `x`,
/// the candidate split partitions the rows into
/// `A = {i | x_i == v}` and `B = {i | x_i != v}`, and
/// `Gain(v) = H(y) - (|A|/n) · H(y_A) - (|B|/n) · H(y_B)`.
/// Returns the `(v, Gain(v))` pairs
/// in the order [`partition`] enumerates the values of `x`.
pub fn information_gain(x: &[i64], y: &[i64]) -> Vec<(i64, f64)> {
    assert_eq!(
        x.len(),
        y.len(),
        "The column and the labels have different lengths",
    );
    let n = y.len() as f64;
    let h = entropy(y);

    partition(x).into_iter()
        .map(|(value, indices)| {
            let y_eq = indices.iter()
                .map(|&i| y[i])
                .collect::<Vec<_>>();
            let y_ne = x.iter()
                .zip(y)
                .filter_map(|(&xi, &yi)| (xi != value).then_some(yi))
                .collect::<Vec<_>>();

            let mut residual = (y_eq.len() as f64 / n) * entropy(&y_eq);
            if !y_ne.is_empty() {
                residual += (y_ne.len() as f64 / n) * entropy(&y_ne);
            }

            (value, h - residual)
        })
        .collect::<Vec<_>>()
}


/// Returns the attribute-value pair of maximal information gain
/// over the rows `indices` of `sample`,
/// or `None` if `candidates` is empty.
///
/// Each distinct attribute in `candidates` is evaluated once,
/// at its first occurrence in the list.
/// Ties are broken by the first-found rule:
/// the scan follows the candidate-list attribute order,
/// then the value order of the gain map,
/// and a later pair replaces the current best
/// only on a strictly larger gain.
pub(crate) fn best_split(
    sample: &Sample,
    indices: &[usize],
    labels: &[i64],
    candidates: &[SplitRule],
) -> Option<SplitRule>
{
    // Each attribute is evaluated once, in candidate-list order.
    let mut attributes = Vec::new();
    for rule in candidates {
        if !attributes.contains(&rule.attribute()) {
            attributes.push(rule.attribute());
        }
    }

    // The gain maps are computed in parallel;
    // `collect` preserves the attribute order,
    // which the tie-break rule depends on.
    let evaluated = attributes.into_par_iter()
        .map(|attribute| {
            let feature = sample.feature(attribute);
            let column = indices.iter()
                .map(|&i| feature[i])
                .collect::<Vec<_>>();
            (attribute, information_gain(&column, labels))
        })
        .collect::<Vec<_>>();

    let mut best: Option<(SplitRule, Score)> = None;
    for (attribute, gains) in evaluated {
        for (value, gain) in gains {
            let gain = Score::from(gain);
            let improves = best.as_ref()
                .map_or(true, |(_, best_gain)| gain > *best_gain);
            if improves {
                best = Some((SplitRule::new(attribute, value), gain));
            }
        }
    }

    best.map(|(rule, _)| rule)
}
