//! Defines evaluation metrics for learned classifiers.


/// Returns the misclassification rate between
/// the true labels and the predicted ones,
/// i.e., the fraction of positions where the two vectors differ.
///
/// This function panics if the two slices have different lengths
/// or are empty.
pub fn misclassification_rate(y_true: &[i64], y_pred: &[i64]) -> f64 {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "The label vectors have different lengths",
    );
    assert!(!y_true.is_empty(), "The label vectors are empty");


    let n_sample = y_true.len() as f64;
    let n_wrong = y_true.iter()
        .zip(y_pred)
        .filter(|(t, p)| t != p)
        .count() as f64;

    n_wrong / n_sample
}
