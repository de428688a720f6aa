use crate::Sample;
use super::id3_algorithm::Id3Tree;
use super::partition::partition;
use super::split_rule::SplitRule;
use super::type_and_struct::Depth;


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 5;


/// A struct that builds `Id3Tree`.
/// `Id3TreeBuilder` keeps parameters for constructing `Id3Tree`.
///
/// # Example
///
/// ```no_run
/// use minitrees::prelude::*;
///
/// # let sample = Sample::from_rows(vec![vec![0]], vec![0]);
/// let tree = Id3TreeBuilder::new(&sample)
///     .max_depth(2)
///     .build();
/// ```
#[derive(Clone)]
pub struct Id3TreeBuilder {
    /// Candidate attribute-value pairs, one per distinct value
    /// of each attribute of the sample.
    candidates: Vec<SplitRule>,

    max_depth: Depth,
}


impl Id3TreeBuilder {
    /// Construct a new instance of [`Id3TreeBuilder`].
    /// The candidate pairs are enumerated from `sample`:
    /// attributes in ascending index order,
    /// values in order of first appearance in the column.
    /// By default, the maximal depth is
    /// `DEFAULT_MAX_DEPTH == 5`.
    pub fn new(sample: &Sample) -> Self {
        let candidates = sample.features()
            .iter()
            .enumerate()
            .flat_map(|(attribute, feature)| {
                partition(feature.values())
                    .into_iter()
                    .map(move |(value, _)| SplitRule::new(attribute, value))
            })
            .collect::<Vec<_>>();
        let max_depth = Depth::from(DEFAULT_MAX_DEPTH);

        Self { candidates, max_depth, }
    }


    /// Specify the maximal depth of the tree.
    /// A depth of `0` is allowed and yields a single majority leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Depth::from(depth);

        self
    }


    /// Build an `Id3Tree`.
    /// This method consumes `self`.
    pub fn build(self) -> Id3Tree {
        Id3Tree::from_components(self.candidates, self.max_depth)
    }
}
