//! The ID3 induction algorithm.

use crate::{
    DecisionTree,
    Sample,
    SplitBy,
};
use crate::node::{
    Edge,
    Label,
    Node,
};
use crate::split_by::partition_by;

/// The ID3 algorithm.
/// Given a categorical training sample,
/// [`Id3`] grows a [`DecisionTree`]:
/// every node splits on the remaining candidate feature
/// that maximizes the impurity reduction,
/// with one child per value observed for that feature.
///
/// # Example
/// ```no_run
/// use minitrees::{Id3, SampleReader, SplitBy};
///
/// // Read the training data from a JSON table file.
/// let file = "/path/to/table.json";
/// let sample = SampleReader::default()
///     .file(file)
///     .read()
///     .unwrap();
///
/// // Grow a tree. `SplitBy::Entropy` is the default,
/// // so the `split_by` call can be dropped.
/// let tree = Id3::new()
///     .split_by(SplitBy::Entropy)
///     .fit(&sample);
///
/// let predictions = tree.classify_all(&sample);
///
/// let n_sample = sample.shape().0;
/// let loss = sample.records()
///     .iter()
///     .zip(predictions)
///     .map(|(record, label)| {
///         let truth = record.get(sample.target());
///         if truth == label.as_str() { 0f64 } else { 1f64 }
///     })
///     .sum::<f64>()
///     / n_sample as f64;
/// println!("loss (train) is: {loss}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3 {
    split_by: SplitBy,
}

impl Id3 {
    /// Initialize [`Id3`] with the default criterion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node splitting rule.
    /// Default value is `SplitBy::Entropy`.
    /// See [`SplitBy`] for other rules.
    #[inline]
    pub fn split_by(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }

    /// Grow a [`DecisionTree`] over the full sample.
    /// Fitting the same sample twice yields
    /// structurally identical trees.
    pub fn fit(&self, sample: &Sample) -> DecisionTree {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<usize>>();
        let features = sample.features()
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>();

        let root = self.grow(sample, ix, &features[..]);

        DecisionTree::new(root)
    }

    /// Construct the sub-tree covering the record subset `ix.`
    fn grow(&self, sample: &Sample, ix: Vec<usize>, features: &[&str])
        -> Node
    {
        // No record reached this point:
        // an unseen feature-value combination.
        if ix.is_empty() {
            return Node::leaf(Label::Unknown);
        }

        let target = sample.target();

        // If all records agree on the target value,
        // construct a pure leaf node.
        let first = sample.at(ix[0]).get(target);
        if ix.iter().all(|&i| sample.at(i).get(target) == first) {
            return Node::leaf(Label::class(first));
        }

        // No candidate feature remains
        // but the target values still disagree,
        // so the majority value decides.
        if features.is_empty() {
            return Node::leaf(mode_label(sample, &ix[..], target));
        }

        // Pick the best splitting feature.
        let feature = self.split_by
            .best_feature(sample, &ix[..], target, features);

        // The chosen feature leaves the candidate list
        // for this branch only.
        // Sibling branches keep their own copies.
        let rest = features.iter()
            .copied()
            .filter(|&f| f != feature)
            .collect::<Vec<&str>>();

        // One edge per observed value of `feature`.
        // Grouping never produces an empty partition.
        let edges = partition_by(sample, &ix[..], feature)
            .into_iter()
            .map(|(value, group)| {
                Edge::new(value, self.grow(sample, group, &rest[..]))
            })
            .collect::<Vec<Edge>>();

        Node::branch(feature, edges)
    }
}

/// Returns the most frequent target value among `ix.`
/// Counting ties resolve to the value
/// that occurs first within `ix.`
fn mode_label(sample: &Sample, ix: &[usize], target: &str) -> Label {
    let groups = partition_by(sample, ix, target);

    let mut best = &groups[0];
    for group in &groups[1..] {
        if group.1.len() > best.1.len() {
            best = group;
        }
    }

    Label::class(best.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;

    #[test]
    fn test_fit_pure_sample_01() {
        let records = vec![
            Record::from([("color", "red"), ("class", "yes")]),
            Record::from([("color", "blue"), ("class", "yes")]),
        ];
        let sample = Sample::new(records, "class", ["color"]);

        let tree = Id3::new().fit(&sample);
        let exp = Node::leaf(Label::class("yes"));
        assert_eq!(&exp, tree.root(), "expected a pure leaf root.");
    }

    #[test]
    fn test_fit_empty_sample_01() {
        let sample = Sample::new(Vec::new(), "class", ["color"]);

        let tree = Id3::new().fit(&sample);
        let exp = Node::leaf(Label::Unknown);
        assert_eq!(&exp, tree.root(), "expected an Unknown leaf root.");
    }

    #[test]
    fn test_fit_exhausted_features_01() {
        // `color` carries no information,
        // so after splitting on it each partition
        // still mixes both classes and has no feature left.
        // Both classes tie 1:1; the first-occurring wins.
        let records = vec![
            Record::from([("color", "red"), ("class", "yes")]),
            Record::from([("color", "red"), ("class", "no")]),
            Record::from([("color", "blue"), ("class", "no")]),
            Record::from([("color", "blue"), ("class", "yes")]),
        ];
        let sample = Sample::new(records, "class", ["color"]);

        let tree = Id3::new().fit(&sample);
        let exp = Node::branch("color", vec![
            Edge::new("red", Node::leaf(Label::class("yes"))),
            Edge::new("blue", Node::leaf(Label::class("no"))),
        ]);
        assert_eq!(&exp, tree.root(), "got {:?}.", tree.root());
    }

    #[test]
    fn test_fit_edge_order_01() {
        // Edges follow the first-occurrence order of the values.
        let records = vec![
            Record::from([("size", "large"), ("class", "yes")]),
            Record::from([("size", "small"), ("class", "no")]),
            Record::from([("size", "medium"), ("class", "no")]),
            Record::from([("size", "large"), ("class", "yes")]),
        ];
        let sample = Sample::new(records, "class", ["size"]);

        let tree = Id3::new().fit(&sample);
        match tree.root() {
            Node::Branch { feature, edges } => {
                assert_eq!(feature, "size");
                let values = edges.iter()
                    .map(|edge| edge.value.as_str())
                    .collect::<Vec<_>>();
                assert_eq!(values, ["large", "small", "medium"]);
            },
            Node::Leaf { .. } => panic!("expected a branch root."),
        }
    }

    #[test]
    fn test_mode_label_01() {
        let records = vec![
            Record::from([("class", "no")]),
            Record::from([("class", "yes")]),
            Record::from([("class", "yes")]),
        ];
        let sample = Sample::new(records, "class", Vec::<String>::new());

        let res = mode_label(&sample, &[0, 1, 2], "class");
        let exp = Label::class("yes");
        assert_eq!(exp, res, "expected {exp}, got {res}.");
    }

    #[test]
    fn test_mode_label_tie_01() {
        // On a 2:2 tie the first-occurring value wins.
        let records = vec![
            Record::from([("class", "no")]),
            Record::from([("class", "yes")]),
            Record::from([("class", "yes")]),
            Record::from([("class", "no")]),
        ];
        let sample = Sample::new(records, "class", Vec::<String>::new());

        let res = mode_label(&sample, &[0, 1, 2, 3], "class");
        let exp = Label::class("no");
        assert_eq!(exp, res, "expected {exp}, got {res}.");
    }
}
