//! This file defines the split rule for the ID3 tree.
use serde::{Serialize, Deserialize};

use crate::Sample;

use std::fmt;


/// The output of the function `split` of `SplitRule`.
/// `Left` collects the rows failing the equality test (the `False` branch),
/// `Right` the rows passing it (the `True` branch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The row fails the equality test.
    Left,
    /// The row passes the equality test.
    Right,
}


/// An attribute-value pair,
/// interpreted as the binary test `attribute == value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRule {
    attribute: usize,
    value: i64,
}


impl SplitRule {
    #[inline]
    pub(crate) fn new(attribute: usize, value: i64) -> Self {
        Self { attribute, value, }
    }


    /// The attribute (column) index this rule tests.
    pub fn attribute(&self) -> usize {
        self.attribute
    }


    /// The category value this rule compares against.
    pub fn value(&self) -> i64 {
        self.value
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, sample: &Sample, row: usize) -> LR {
        let value = sample.feature(self.attribute)[row];

        if value == self.value {
            LR::Right
        } else {
            LR::Left
        }
    }


    /// Defines the splitting for a single example slice.
    #[inline]
    pub(crate) fn split_example(&self, x: &[i64]) -> LR {
        if x[self.attribute] == self.value {
            LR::Right
        } else {
            LR::Left
        }
    }
}


impl fmt::Display for SplitRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{} = {}", self.attribute, self.value)
    }
}
