use minitrees::prelude::*;


// Toy example: y = x0 XOR x1.
// No single equality test separates the labels,
// so a depth-1 tree degenerates to majority leaves,
// while a depth-2 tree classifies the four rows perfectly.
fn xor_sample() -> Sample {
    let rows = vec![
        vec![0, 0],
        vec![0, 1],
        vec![1, 0],
        vec![1, 1],
    ];
    let target = vec![0, 1, 1, 0];

    Sample::from_rows(rows, target)
}


#[test]
fn xor_is_separable_at_depth_two() {
    let sample = xor_sample();
    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(2)
        .build();
    let f = tree.fit(&sample);

    let predictions = f.predict_all(&sample);
    let loss = misclassification_rate(sample.target(), &predictions);

    assert_eq!(loss, 0.0);
    assert!(f.depth() <= 2);
}


#[test]
fn xor_is_not_separable_at_depth_one() {
    let sample = xor_sample();
    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(1)
        .build();
    let f = tree.fit(&sample);

    let predictions = f.predict_all(&sample);
    let loss = misclassification_rate(sample.target(), &predictions);

    // Every split leaves a label tie on both sides, and
    // a tie falls back to the smaller label.
    assert_eq!(loss, 0.5);
    assert_eq!(predictions, vec![0, 0, 0, 0]);
    assert!(f.depth() <= 1);
}


#[test]
fn depth_zero_tree_is_a_single_majority_leaf() {
    let rows = vec![
        vec![0, 1],
        vec![1, 1],
        vec![1, 0],
        vec![0, 0],
    ];
    let target = vec![1, 1, 1, 0];
    let sample = Sample::from_rows(rows, target);

    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(0)
        .build();
    let f = tree.fit(&sample);

    assert_eq!(f.depth(), 0);
    assert_eq!(f.leaves(), 1);
    assert_eq!(f.predict_all(&sample), vec![1, 1, 1, 1]);
}


#[test]
fn majority_tie_falls_back_to_the_smaller_label() {
    let sample = xor_sample();
    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(0)
        .build();
    let f = tree.fit(&sample);

    assert_eq!(f.predict_all(&sample), vec![0, 0, 0, 0]);
}


#[test]
fn pure_labels_short_circuit_before_the_depth_bound() {
    let rows = vec![vec![0], vec![1], vec![2]];
    let target = vec![1, 1, 1];
    let sample = Sample::from_rows(rows, target);

    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(0)
        .build();
    let f = tree.fit(&sample);

    assert_eq!(f.leaves(), 1);
    assert_eq!(f.predict_all(&sample), vec![1, 1, 1]);
}


#[test]
fn distinct_rows_are_reproduced_with_a_generous_depth_bound() {
    // y = x0 AND (x1 OR x2) over the eight distinct rows;
    // the greedy splits need depth 3 to reach purity.
    let rows = (0..8).map(|i| vec![i >> 2 & 1, i >> 1 & 1, i & 1])
        .collect::<Vec<Vec<i64>>>();
    let target = rows.iter()
        .map(|row| row[0] & (row[1] | row[2]))
        .collect::<Vec<_>>();
    let sample = Sample::from_rows(rows, target);

    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(10)
        .build();
    let f = tree.fit(&sample);

    assert_eq!(f.predict_all(&sample), sample.target().to_vec());
}


#[test]
fn predict_example_agrees_with_predict() {
    let sample = xor_sample();
    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(2)
        .build();
    let f = tree.fit(&sample);

    let n_sample = sample.shape().0;
    for row in 0..n_sample {
        let (x, _) = sample.at(row);
        assert_eq!(f.predict_example(&x), f.predict(&sample, row));
    }
}


#[test]
fn fitting_twice_yields_the_same_tree() {
    // The learner never consumes its candidate list,
    // so repeated fits must agree.
    let sample = xor_sample();
    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(2)
        .build();

    let f1 = tree.fit(&sample);
    let f2 = tree.fit(&sample);

    assert_eq!(f1, f2);
}


#[test]
fn display_renders_the_indented_tree() {
    let sample = xor_sample();
    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(2)
        .build();
    let f = tree.fit(&sample);

    let text = format!("{f}");
    assert!(text.starts_with("TREE\n"));
    assert!(text.contains("+-- [SPLIT: x"));
    assert!(text.contains("False]"));
    assert!(text.contains("True]"));
    assert!(text.contains("+-- [LABEL = "));
}


#[test]
fn dot_output_is_a_digraph_with_labeled_edges() {
    let sample = xor_sample();
    let tree = Id3TreeBuilder::new(&sample)
        .max_depth(2)
        .build();
    let f = tree.fit(&sample);

    let dot = f.to_dot();
    assert!(dot.starts_with("digraph TREE {\n"));
    assert!(dot.ends_with("}\n"));
    assert!(dot.contains("node0 [label=\"x"));
    assert!(dot.contains("[label=\"False\"]"));
    assert!(dot.contains("[label=\"True\"]"));
    assert!(dot.contains("[label=\"y = "));
}


#[test]
#[should_panic]
fn non_binary_labels_are_rejected() {
    let rows = vec![vec![0], vec![1]];
    let target = vec![0, 2];
    let sample = Sample::from_rows(rows, target);

    let tree = Id3TreeBuilder::new(&sample).build();
    tree.fit(&sample);
}
