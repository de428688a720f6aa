//! Defines the inner representation
//! of the ID3 tree classifier.
use crate::{Classifier, Sample};

use super::split_rule::*;

use serde::{Serialize, Deserialize};

use std::fmt;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of the tree.
/// Each `BranchNode` tests a single equality `attribute == value`
/// and has exactly two childrens:
/// `left` collects the rows failing the test (the `False` branch),
/// `right` the rows passing it (the `True` branch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: SplitRule,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of the tree.
/// A leaf carries the predicted class label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: i64,
}


impl Node {
    /// Construct a leaf node that predicts `label`.
    #[inline]
    pub(super) fn leaf(label: i64) -> Self {
        Self::Leaf(LeafNode { label })
    }


    /// Construct a branch node from the rule and its two subtrees.
    #[inline]
    pub(super) fn branch(rule: SplitRule, left: Self, right: Self) -> Self {
        Self::Branch(BranchNode {
            rule,
            left: Box::new(left),
            right: Box::new(right),
        })
    }


    /// Returns the number of leaves of this sub-tree.
    #[inline]
    pub fn leaves(&self) -> usize {
        match self {
            Node::Branch(ref node)
                => node.left.leaves() + node.right.leaves(),
            Node::Leaf(_) => 1_usize,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(ref node)
                => 1 + node.left.depth().max(node.right.depth()),
            Node::Leaf(_) => 0_usize,
        }
    }


    /// Predicts the label of the single example `x`.
    #[inline]
    pub(super) fn predict_example(&self, x: &[i64]) -> i64 {
        match self {
            Node::Branch(ref node) => {
                match node.rule.split_example(x) {
                    LR::Left => node.left.predict_example(x),
                    LR::Right => node.right.predict_example(x),
                }
            },
            Node::Leaf(ref node) => node.label,
        }
    }
}


impl Classifier for LeafNode {
    #[inline]
    fn predict(&self, _sample: &Sample, _row: usize) -> i64 {
        self.label
    }
}


impl Classifier for BranchNode {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        match self.rule.split(sample, row) {
            LR::Left => self.left.predict(sample, row),
            LR::Right => self.right.predict(sample, row),
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        match self {
            Node::Branch(ref node) => node.predict(sample, row),
            Node::Leaf(ref node) => node.predict(sample, row),
        }
    }
}


impl Node {
    /// Writes the indented textual rendering of this sub-tree.
    /// Each branch prints its rule twice,
    /// once per outcome,
    /// so that every line of the output names
    /// the test an example must pass to reach it.
    pub(super) fn write_text(
        &self,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
    ) -> fmt::Result
    {
        let indent = "|\t".repeat(depth);
        match self {
            Node::Branch(branch) => {
                writeln!(f, "{indent}+-- [SPLIT: {} False]", branch.rule)?;
                branch.left.write_text(f, depth + 1)?;
                writeln!(f, "{indent}+-- [SPLIT: {} True]", branch.rule)?;
                branch.right.write_text(f, depth + 1)
            },
            Node::Leaf(leaf) => {
                writeln!(f, "{indent}+-- [LABEL = {}]", leaf.label)
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "    node{id} [label=\"{rule}?\"];\n",
                    rule = b.rule,
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = vec![b_info];
                info.extend(l_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "    node{id} -> node{l_id} [label=\"False\"];\n",
                    l_id = id + 1,
                );
                let r_edge = format!(
                    "    node{id} -> node{r_id} [label=\"True\"];\n",
                    r_id = next_id,
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "    node{id} [label=\"y = {label}\"];\n",
                    label = l.label,
                );

                (vec![info], id + 1)
            },
        }
    }
}
