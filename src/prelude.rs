//! Exports the commonly used items of this crate.
//!
pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
};


pub use crate::classifier::Classifier;


pub use crate::decision_tree::{
    // Splitting criterion
    entropy,
    information_gain,
    partition,


    // The learner and its output
    Id3Tree,
    Id3TreeBuilder,
    Id3TreeClassifier,


    // Split representation
    SplitRule,
    LR,
};


pub use crate::metrics::misclassification_rate;
