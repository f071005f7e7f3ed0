//! The fitted decision tree.

use colored::Colorize;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Record, Sample};
use crate::node::{Label, Node};

/// A classification tree grown by [`Id3`](crate::Id3).
/// The tree owns its nodes and never changes after construction.
///
/// `DecisionTree` implements [`fmt::Display`]:
/// the rendering nests each node's label under its parent,
/// one line per node, with the synthetic label `root` on top
/// and `"<feature> : <value>"` on every branch edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Called only via `Id3::fit`.
    #[inline]
    pub(crate) fn new(root: Node) -> Self {
        Self { root, }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the number of nodes on the longest
    /// root-to-leaf path.
    /// Never exceeds the number of features plus one.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns the number of leaves.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }

    /// Classify a single record.
    /// See [`Node::classify`].
    pub fn classify(&self, record: &Record) -> Label {
        self.root.classify(record)
    }

    /// Classify every record of `sample.`
    pub fn classify_all(&self, sample: &Sample) -> Vec<Label> {
        sample.records()
            .par_iter()
            .map(|record| self.classify(record))
            .collect()
    }

    /// Print the tree to stdout
    /// with the leaf labels highlighted.
    pub fn print(&self) {
        println!("{}", "root".bold());
        print_children(&self.root, "");
    }

    /// Returns the tree in the DOT language.
    /// Branch nodes show the splitting feature,
    /// edges carry the feature values,
    /// and leaves are drawn as boxes.
    pub fn to_dot(&self) -> String {
        let (info, _) = dot_info(&self.root, 0);
        let info = info.join("");

        format!("graph tree {{\n{info}}}\n")
    }
}

/// The lines a node contributes to the rendering:
/// a leaf shows its label,
/// a branch shows one `"<feature> : <value>"` line per edge
/// with the edge's subtree nested below it.
fn child_lines(node: &Node) -> Vec<(String, Option<&Node>)> {
    match node {
        Node::Branch { feature, edges } => {
            edges.iter()
                .map(|edge| {
                    let value = &edge.value;
                    let line = format!("{feature} : {value}");
                    (line, Some(&edge.child))
                })
                .collect()
        },
        Node::Leaf { label } => {
            vec![(label.to_string(), None)]
        },
    }
}

fn render(node: &Node, prefix: &str, f: &mut fmt::Formatter<'_>)
    -> fmt::Result
{
    let children = child_lines(node);
    let last = children.len() - 1;

    for (i, (line, child)) in children.into_iter().enumerate() {
        let (connector, extension) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        write!(f, "\n{prefix}{connector}{line}")?;

        if let Some(child) = child {
            let prefix = format!("{prefix}{extension}");
            render(child, &prefix, f)?;
        }
    }
    Ok(())
}

fn print_children(node: &Node, prefix: &str) {
    let children = child_lines(node);
    let last = children.len() - 1;

    for (i, (line, child)) in children.into_iter().enumerate() {
        let (connector, extension) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        match child {
            Some(child) => {
                println!("{prefix}{connector}{line}");
                let prefix = format!("{prefix}{extension}");
                print_children(child, &prefix);
            },
            None => {
                let line = line.bold().green();
                println!("{prefix}{connector}{line}");
            },
        }
    }
}

fn dot_info(node: &Node, id: usize) -> (Vec<String>, usize) {
    match node {
        Node::Branch { feature, edges } => {
            let mut info = vec![format!(
                "\tnode_{id} [ label = \"{feature} ?\" ];\n"
            )];

            let mut next_id = id + 1;
            for edge in edges {
                let child_id = next_id;
                let (mut child_info, return_id) =
                    dot_info(&edge.child, child_id);

                info.append(&mut child_info);
                info.push(format!(
                    "\tnode_{id} -- node_{child_id} \
                     [ label = \"{value}\" ];\n",
                    value = edge.value,
                ));
                next_id = return_id;
            }

            (info, next_id)
        },
        Node::Leaf { label } => {
            let info = format!(
                "\tnode_{id} [ label = \"{label}\", shape = box ];\n"
            );

            (vec![info], id + 1)
        },
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        render(&self.root, "", f)
    }
}
