#![warn(missing_docs)]

//!
//! A crate that provides the ID3 decision-tree learning algorithm
//! for binary-labeled categorical data.
//!
//! The learner grows a **binary** tree:
//! every internal node tests a single equality,
//! `attribute == value`,
//! and routes an example to the `False` or `True` child.
//! The split test of each node is chosen greedily
//! by maximizing information gain
//! over all remaining attribute-value pairs.
//!
//! A typical workflow:
//!
//! ```no_run
//! use minitrees::prelude::*;
//!
//! // Read a comma-separated file whose first column is the class label.
//! let train = SampleReader::new()
//!     .file("train.csv")
//!     .read()
//!     .unwrap();
//!
//! // Learn a tree of depth at most 3.
//! let tree = Id3TreeBuilder::new(&train)
//!     .max_depth(3)
//!     .build();
//! let f = tree.fit(&train);
//!
//! // Classify the training examples and measure the error.
//! let predictions = f.predict_all(&train);
//! let loss = misclassification_rate(train.target(), &predictions);
//! println!("loss (train) is: {loss}");
//! ```

pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod metrics;
pub mod prelude;

pub(crate) mod common;


pub use sample::{Feature, Sample, SampleReader};
pub use classifier::Classifier;
pub use decision_tree::{
    entropy,
    information_gain,
    partition,
    Id3Tree,
    Id3TreeBuilder,
    Id3TreeClassifier,
    SplitRule,
    LR,
};
pub use metrics::misclassification_rate;
