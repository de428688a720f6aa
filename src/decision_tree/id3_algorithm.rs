use crate::Sample;
use crate::common::checker;

use super::criterion::best_split;
use super::id3_classifier::Id3TreeClassifier;
use super::node::Node;
use super::partition::partition;
use super::split_rule::*;
use super::type_and_struct::Depth;

use std::fmt;


/// The ID3 algorithm.
/// Given a set of binary-labeled categorical training examples,
/// [`Id3Tree`] outputs a decision tree classifier
/// named [`Id3TreeClassifier`]
/// under the specified parameters.
///
/// The tree is **binary**:
/// every internal node tests a single equality `attribute == value`
/// chosen greedily by maximizing information gain
/// over the remaining candidate attribute-value pairs.
///
/// [`Id3Tree`] is constructed
/// by [`Id3TreeBuilder`](crate::decision_tree::Id3TreeBuilder).
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// // Read the training data from a comma-separated file
/// // whose first column is the class label.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::new()
///     .file(file)
///     .read()
///     .unwrap();
///
///
/// // Learn a tree of depth at most 2.
/// let tree = Id3TreeBuilder::new(&sample)
///     .max_depth(2)
///     .build();
/// let f = tree.fit(&sample);
///
/// let predictions = f.predict_all(&sample);
///
/// let loss = misclassification_rate(sample.target(), &predictions);
/// println!("loss (train) is: {loss}");
/// ```
pub struct Id3Tree {
    candidates: Vec<SplitRule>,
    max_depth: Depth,
}


impl Id3Tree {
    /// Initialize [`Id3Tree`].
    /// This method is called only via `Id3TreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        candidates: Vec<SplitRule>,
        max_depth: Depth,
    ) -> Self
    {
        Self { candidates, max_depth, }
    }


    /// Learn a decision tree from `sample`.
    /// The sample must be non-empty, rectangular,
    /// and carry labels in `{0, 1}`.
    pub fn fit(&self, sample: &Sample) -> Id3TreeClassifier {
        checker::check_sample(sample);
        checker::check_binary_target(sample);

        let n_sample = sample.shape().0;
        let indices = (0..n_sample).collect::<Vec<usize>>();

        let root = self.grow(sample, indices, self.candidates.clone(), 0);

        Id3TreeClassifier::from(root)
    }


    /// Grow the sub-tree over the rows `indices` of `sample`.
    ///
    /// The termination rules, checked in this order:
    /// 1. all labels are `1` -> `Leaf(1)`;
    /// 2. all labels are `0` -> `Leaf(0)`;
    /// 3. no candidate pair remains, or `depth` reached the bound
    ///    -> majority leaf.
    /// Otherwise the best pair splits the rows and
    /// both children grow at `depth + 1`,
    /// each with its own copy of the candidate list
    /// without the chosen pair.
    fn grow(
        &self,
        sample: &Sample,
        indices: Vec<usize>,
        candidates: Vec<SplitRule>,
        depth: usize,
    ) -> Node
    {
        let target = sample.target();
        let labels = indices.iter()
            .map(|&i| target[i])
            .collect::<Vec<_>>();

        if labels.iter().all(|&y| y == 1) {
            return Node::leaf(1);
        }
        if labels.iter().all(|&y| y == 0) {
            return Node::leaf(0);
        }

        if candidates.is_empty() || self.max_depth == depth {
            return Node::leaf(majority_label(&labels));
        }

        // Find the attribute-value pair of maximal information gain.
        let rule = match best_split(sample, &indices, &labels, &candidates) {
            Some(rule) => rule,
            None => return Node::leaf(majority_label(&labels)),
        };

        // Split the rows for the left/right childrens.
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices {
            match rule.split(sample, i) {
                LR::Left  => { lindices.push(i); },
                LR::Right => { rindices.push(i); },
            }
        }

        // If the split has no meaning, construct a leaf node.
        if lindices.is_empty() || rindices.is_empty() {
            return Node::leaf(majority_label(&labels));
        }

        // Both children observe the candidate list
        // without the chosen pair;
        // the caller's list is left untouched.
        let reduced = candidates.into_iter()
            .filter(|candidate| *candidate != rule)
            .collect::<Vec<_>>();

        let left = self.grow(sample, lindices, reduced.clone(), depth + 1);
        let right = self.grow(sample, rindices, reduced, depth + 1);

        Node::branch(rule, left, right)
    }
}


/// Returns the most common label of `y`.
/// When the counts are equal, the smallest label value wins:
/// the counts are scanned in ascending label order and
/// a later label replaces the current best
/// only on a strictly larger count.
#[inline]
fn majority_label(y: &[i64]) -> i64 {
    assert!(!y.is_empty(), "Tried to take the majority of no labels");

    let mut counts = partition(y)
        .into_iter()
        .map(|(value, indices)| (value, indices.len()))
        .collect::<Vec<_>>();
    counts.sort_by_key(|&(value, _)| value);

    let (mut label, mut count) = counts[0];
    for (value, n) in counts.into_iter().skip(1) {
        if n > count {
            label = value;
            count = n;
        }
    }

    label
}


impl fmt::Display for Id3Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree Learner\n\n\
            - Max depth: {}\n\
            - Candidate pairs: {}\n\
            ----------\
            ",
            self.max_depth,
            self.candidates.len(),
        )
    }
}
