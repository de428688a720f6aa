use minitrees::misclassification_rate;

use rand::prelude::*;


#[test]
fn identical_predictions_have_zero_error() {
    let mut rng = StdRng::seed_from_u64(777);
    let y = (0..100).map(|_| rng.gen_range(0..2))
        .collect::<Vec<i64>>();

    assert_eq!(misclassification_rate(&y, &y), 0.0);
}


#[test]
fn flipped_predictions_have_unit_error() {
    let mut rng = StdRng::seed_from_u64(777);
    let y = (0..100).map(|_| rng.gen_range(0..2))
        .collect::<Vec<i64>>();
    let flipped = y.iter()
        .map(|&yi| 1 - yi)
        .collect::<Vec<_>>();

    assert_eq!(misclassification_rate(&y, &flipped), 1.0);
}


#[test]
fn counts_the_fraction_of_disagreements() {
    let y_true = [0, 1, 1, 0];
    let y_pred = [0, 1, 0, 1];

    assert_eq!(misclassification_rate(&y_true, &y_pred), 0.5);
}


#[test]
#[should_panic]
fn mismatched_lengths_panic() {
    misclassification_rate(&[0, 1], &[0]);
}


#[test]
#[should_panic]
fn empty_labels_panic() {
    misclassification_rate(&[], &[]);
}
