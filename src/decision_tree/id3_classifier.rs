//! Defines the classifier learned by `Id3Tree`.
use colored::Colorize;

use crate::{Classifier, Sample};

use super::node::Node;

use serde::{Serialize, Deserialize};

use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;


/// ID3 decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id3TreeClassifier {
    root: Node,
}


impl From<Node> for Id3TreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for Id3TreeClassifier {
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        self.root.predict(sample, row)
    }
}


impl Id3TreeClassifier {
    /// Predicts the label of the single example `x`,
    /// given as a slice of attribute values.
    #[inline]
    pub fn predict_example(&self, x: &[i64]) -> i64 {
        self.root.predict_example(x)
    }


    /// Returns the number of leaves of the tree.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the depth of the tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the DOT-format description of the tree,
    /// suitable for rendering with Graphviz.
    /// Split nodes are labeled by their test,
    /// leaf nodes by their predicted label, and
    /// edges by the test outcome.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph TREE {\n");

        let info = self.root.to_dot_info(0).0;
        info.into_iter()
            .for_each(|row| {
                dot.push_str(&row);
            });

        dot.push_str("}\n");

        dot
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;

        Ok(())
    }


    /// Pretty-prints the tree to the console,
    /// with colorized split/label tags.
    /// Use `println!("{self}")` for the plain rendering.
    pub fn print_tree(&self) {
        println!("{}", "TREE".bold());
        print_node(&self.root, 0);
    }
}


fn print_node(node: &Node, depth: usize) {
    let indent = "|\t".repeat(depth);
    match node {
        Node::Branch(branch) => {
            let rule = branch.rule;
            println!(
                "{indent}+-- [{}: {rule} {}]",
                "SPLIT".blue().bold(),
                "False".red(),
            );
            print_node(&branch.left, depth + 1);
            println!(
                "{indent}+-- [{}: {rule} {}]",
                "SPLIT".blue().bold(),
                "True".green(),
            );
            print_node(&branch.right, depth + 1);
        },
        Node::Leaf(leaf) => {
            println!(
                "{indent}+-- [{} = {}]",
                "LABEL".blue().bold(),
                leaf.label,
            );
        },
    }
}


impl fmt::Display for Id3TreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TREE")?;
        self.root.write_text(f, 0)
    }
}
