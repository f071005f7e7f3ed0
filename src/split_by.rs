//! Split criteria for growing a decision tree,
//! together with the impurity computations behind them.

use std::fmt;
use std::collections::HashMap;

use crate::Sample;

/// Groups the record subset `ix` by the value
/// each record takes at `attribute.`
/// Partitions appear in first-occurrence order within `ix`,
/// so every enumeration over distinct values is deterministic.
pub(crate) fn partition_by<'a>(
    sample: &'a Sample,
    ix: &[usize],
    attribute: &str,
) -> Vec<(&'a str, Vec<usize>)>
{
    let mut position = HashMap::<&str, usize>::new();
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();

    for &i in ix {
        let value = sample.at(i).get(attribute);
        match position.get(value) {
            Some(&k) => { groups[k].1.push(i); },
            None => {
                position.insert(value, groups.len());
                groups.push((value, vec![i]));
            },
        }
    }
    groups
}

/// Computes the Shannon entropy of `target`
/// over the record subset `ix`:
/// `- Σ_v p_v log2 p_v` over the distinct values `v`
/// observed for `target.`
/// Returns `0` for a pure subset and `log2 k`
/// for `k` equally likely values.
/// This function panics when `ix` is empty.
pub fn entropy(sample: &Sample, ix: &[usize], target: &str) -> f64 {
    assert!(
        !ix.is_empty(),
        "Tried to compute the entropy of an empty record subset"
    );
    let total = ix.len() as f64;

    partition_by(sample, ix, target)
        .into_iter()
        .map(|(_, group)| {
            let p = group.len() as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}

/// Computes the conditional entropy `H(target | condition)`
/// over the record subset `ix`:
/// the size-weighted average of the entropy of `target`
/// over each partition induced by `condition.`
/// This function panics when `ix` is empty.
pub fn conditional_entropy(
    sample: &Sample,
    ix: &[usize],
    target: &str,
    condition: &str,
) -> f64
{
    assert!(
        !ix.is_empty(),
        "Tried to compute the conditional entropy \
         of an empty record subset"
    );
    let total = ix.len() as f64;

    partition_by(sample, ix, condition)
        .into_iter()
        .map(|(_, group)| {
            let weight = group.len() as f64 / total;
            weight * entropy(sample, &group[..], target)
        })
        .sum::<f64>()
}

/// Computes the Gini impurity of `target`
/// over the record subset `ix`:
/// `1 - Σ_v p_v^2.`
/// This function panics when `ix` is empty.
pub fn gini(sample: &Sample, ix: &[usize], target: &str) -> f64 {
    assert!(
        !ix.is_empty(),
        "Tried to compute the Gini impurity of an empty record subset"
    );
    let total = ix.len() as f64;

    let correct = partition_by(sample, ix, target)
        .into_iter()
        .map(|(_, group)| (group.len() as f64 / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}

/// Computes the size-weighted average of the Gini impurity
/// of `target` over each partition induced by `condition.`
/// This function panics when `ix` is empty.
pub fn conditional_gini(
    sample: &Sample,
    ix: &[usize],
    target: &str,
    condition: &str,
) -> f64
{
    assert!(
        !ix.is_empty(),
        "Tried to compute the conditional Gini impurity \
         of an empty record subset"
    );
    let total = ix.len() as f64;

    partition_by(sample, ix, condition)
        .into_iter()
        .map(|(_, group)| {
            let weight = group.len() as f64 / total;
            weight * gini(sample, &group[..], target)
        })
        .sum::<f64>()
}

/// Splitting criteria for growing a decision tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitBy {
    /// Shannon entropy. Maximizing the information gain
    /// `H(target) - H(target | feature)` is the ID3 criterion.
    #[default]
    Entropy,
    /// Gini index.
    Gini,
}

impl fmt::Display for SplitBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "Entropy",
            Self::Gini => "Gini index",
        };

        write!(f, "{name}")
    }
}

impl SplitBy {
    /// Returns the impurity of `target` over `ix`
    /// under the criterion.
    fn impurity(&self, sample: &Sample, ix: &[usize], target: &str)
        -> f64
    {
        match self {
            Self::Entropy => entropy(sample, ix, target),
            Self::Gini => gini(sample, ix, target),
        }
    }

    /// Returns the impurity of `target` over `ix`
    /// conditioned on `condition,` under the criterion.
    fn conditional_impurity(
        &self,
        sample: &Sample,
        ix: &[usize],
        target: &str,
        condition: &str,
    ) -> f64
    {
        match self {
            Self::Entropy => {
                conditional_entropy(sample, ix, target, condition)
            },
            Self::Gini => {
                conditional_gini(sample, ix, target, condition)
            },
        }
    }

    /// Returns the impurity reduction obtained
    /// by splitting `ix` on `condition.`
    /// For `SplitBy::Entropy` this is the information gain.
    /// Conditioning never increases impurity,
    /// so the result is non-negative up to rounding.
    pub fn gain(
        &self,
        sample: &Sample,
        ix: &[usize],
        target: &str,
        condition: &str,
    ) -> f64
    {
        self.impurity(sample, ix, target)
            - self.conditional_impurity(sample, ix, target, condition)
    }

    /// Returns the candidate in `features` that maximizes
    /// the impurity reduction over the record subset `ix.`
    /// Ties resolve to the earliest-listed candidate.
    /// This method panics when `ix` or `features` is empty.
    pub fn best_feature<'a>(
        &self,
        sample: &Sample,
        ix: &[usize],
        target: &str,
        features: &[&'a str],
    ) -> &'a str
    {
        assert!(
            !ix.is_empty(),
            "Tried to pick a splitting feature \
             for an empty record subset"
        );
        assert!(
            !features.is_empty(),
            "Tried to pick a splitting feature \
             from an empty candidate list"
        );

        let baseline = self.impurity(sample, ix, target);

        let mut best_feature = features[0];
        let mut best_gain = baseline
            - self.conditional_impurity(sample, ix, target, best_feature);

        // A strict `>` keeps the earliest maximizer on ties.
        for &feature in &features[1..] {
            let gain = baseline
                - self.conditional_impurity(sample, ix, target, feature);
            if gain > best_gain {
                best_feature = feature;
                best_gain = gain;
            }
        }

        best_feature
    }
}
