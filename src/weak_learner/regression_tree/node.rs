//! Defines the inner representation
//! of the Regression Tree class.
use crate::{Regressor, Sample};

use super::split_rule::*;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of regression tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of regression tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LeafNode {
    pub(super) prediction: f64,
}


impl Node {
    /// Construct a leaf node that predicts `prediction`.
    #[inline]
    pub(super) fn leaf(prediction: f64) -> Box<Self> {
        Box::new(Node::Leaf(LeafNode { prediction }))
    }


    /// Construct a branch node from the arguments.
    #[inline]
    pub(super) fn branch(
        rule: Splitter,
        left: Box<Node>,
        right: Box<Node>,
    ) -> Box<Self>
    {
        Box::new(Node::Branch(BranchNode { rule, left, right }))
    }


    /// Returns the number of leaves of this sub-tree.
    pub(super) fn leaves(&self) -> usize {
        match self {
            Node::Branch(node) => node.left.leaves() + node.right.leaves(),
            Node::Leaf(_) => 1_usize,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub(super) fn depth(&self) -> usize {
        match self {
            Node::Branch(node) => {
                1 + node.left.depth().max(node.right.depth())
            },
            Node::Leaf(_) => 0_usize,
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{feat} < {thr:.2} ?\" ];\n",
                    feat = b.rule.name,
                    thr = b.rule.threshold
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p:.4}\", \
                     shape = box, \
                     ];\n",
                    p = l.prediction
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl Regressor for Node {
    #[inline]
    fn predict(&self, sample: &Sample, row: usize) -> f64 {
        match self {
            Node::Branch(node) => match node.rule.split(sample, row) {
                LR::Left => node.left.predict(sample, row),
                LR::Right => node.right.predict(sample, row),
            },
            Node::Leaf(node) => node.prediction,
        }
    }
}
