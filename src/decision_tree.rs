//! Defines the ID3 decision tree learner.

/// Defines the ID3 learner.
pub mod id3_algorithm;
/// Defines the classifier produced by `Id3Tree`.
pub mod id3_classifier;
/// Defines the `Id3TreeBuilder`.
pub mod builder;
/// Defines the splitting criterion.
pub mod criterion;
/// Defines the partitioning of a column by value.
pub mod partition;
/// Defines the split rule of the internal tree nodes.
pub mod split_rule;

/// Defines the inner representations of `Id3TreeClassifier`.
mod node;
mod type_and_struct;


pub use id3_algorithm::Id3Tree;
pub use id3_classifier::Id3TreeClassifier;
pub use builder::{Id3TreeBuilder, DEFAULT_MAX_DEPTH};
pub use criterion::{entropy, information_gain};
pub use partition::partition;
pub use split_rule::{SplitRule, LR};

pub(crate) use type_and_struct::Depth;
