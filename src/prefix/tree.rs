// Minimum-weight binary merge (Huffman) tree.
//
// Nodes are an owned recursive enum: every child is boxed and owned by its
// parent, so dropping the `MergeTree` releases the whole tree.
//
// Construction uses a `BinaryHeap` keyed on (weight, insertion sequence).
// Leaves are pushed in ascending byte order and merged nodes get increasing
// sequence numbers, so ties always break the same way for the same input.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::frequency::FrequencyTable;

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeNode {
    Leaf {
        byte: u8,
        weight: u64,
    },
    /// `right` is `None` only for the root of a single-symbol tree.
    Internal {
        weight: u64,
        left: Box<MergeNode>,
        right: Option<Box<MergeNode>>,
    },
}

impl MergeNode {
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    fn merge(left: MergeNode, right: MergeNode) -> Self {
        Self::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Some(Box::new(right)),
        }
    }

    fn children(&self) -> impl Iterator<Item = &MergeNode> {
        let (left, right) = match self {
            Self::Leaf { .. } => (None, None),
            Self::Internal { left, right, .. } => (Some(&**left), right.as_deref()),
        };
        left.into_iter().chain(right)
    }
}

// ---------------------------------------------------------------------------
// Heap entry
// ---------------------------------------------------------------------------

struct HeapEntry {
    seq: u64,
    node: MergeNode,
}

impl HeapEntry {
    fn key(&self) -> (u64, u64) {
        (self.node.weight(), self.seq)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.key().cmp(&self.key())
    }
}

// ---------------------------------------------------------------------------
// MergeTree
// ---------------------------------------------------------------------------

/// A merge tree over the symbols of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTree {
    root: MergeNode,
}

impl MergeTree {
    /// Build the tree. Returns `None` when the table is empty.
    ///
    /// A table with a single distinct byte produces a root with one left
    /// leaf, so that byte still receives a one-bit code.
    pub fn build(freq: &FrequencyTable) -> Option<Self> {
        let mut heap: BinaryHeap<HeapEntry> = freq
            .iter()
            .enumerate()
            .map(|(seq, (byte, weight))| HeapEntry {
                seq: seq as u64,
                node: MergeNode::Leaf { byte, weight },
            })
            .collect();
        let mut next_seq = heap.len() as u64;

        if heap.len() == 1 {
            let leaf = heap.pop()?.node;
            return Some(Self {
                root: MergeNode::Internal {
                    weight: leaf.weight(),
                    left: Box::new(leaf),
                    right: None,
                },
            });
        }

        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push(HeapEntry {
                seq: next_seq,
                node: MergeNode::merge(left.node, right.node),
            });
            next_seq += 1;
        }

        heap.pop().map(|entry| Self { root: entry.node })
    }

    pub fn root(&self) -> &MergeNode {
        &self.root
    }

    /// Total weight, equal to the input length.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.count_where(MergeNode::is_leaf)
    }

    pub fn internal_count(&self) -> usize {
        self.count_where(|n| !n.is_leaf())
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn depth_of(node: &MergeNode) -> usize {
            node.children().map(|c| 1 + depth_of(c)).max().unwrap_or(0)
        }
        depth_of(&self.root)
    }

    fn count_where(&self, pred: impl Fn(&MergeNode) -> bool + Copy) -> usize {
        fn walk(node: &MergeNode, pred: impl Fn(&MergeNode) -> bool + Copy) -> usize {
            usize::from(pred(node)) + node.children().map(|c| walk(c, pred)).sum::<usize>()
        }
        walk(&self.root, pred)
    }
}
