//! This file defines the partitioning of a column by value.


/// Partition the column `x` into groups indexed by its distinct values.
///
/// Returns one `(value, indices)` pair per distinct value,
/// where `indices` lists the positions of `x` holding that value
/// in their original order.
/// The groups appear in order of first occurrence,
/// so the result is deterministic for a given input.
pub fn partition(x: &[i64]) -> Vec<(i64, Vec<usize>)> {
    let mut groups: Vec<(i64, Vec<usize>)> = Vec::new();

    for (i, &value) in x.iter().enumerate() {
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, indices)) => { indices.push(i); },
            None => { groups.push((value, vec![i])); },
        }
    }

    groups
}
