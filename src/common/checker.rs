//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) {
    let (n_sample, n_feature) = sample.shape();


    // `sample` must have an example.
    assert!(n_sample > 0, "The sample has no examples");


    // `sample` must have a feature.
    assert!(n_feature > 0, "The sample has no features");


    // Each example must have a label.
    assert_eq!(
        n_sample,
        sample.target().len(),
        "The number of labels differs from the number of examples",
    );
}


/// Check whether the target column takes values in `{0, 1}`.
#[inline(always)]
pub(crate) fn check_binary_target(sample: &Sample) {
    let all_binary = sample.target()
        .iter()
        .all(|&y| y == 0 || y == 1);
    assert!(
        all_binary,
        "The target values must take value in {{0, 1}}",
    );
}
