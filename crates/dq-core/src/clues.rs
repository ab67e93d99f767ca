//! Clue index
//!
//! Collected clues live in an unbalanced binary search tree keyed by the clue
//! text. Keys compare byte-wise (case-sensitive), each distinct clue is stored
//! once, and an in-order walk yields them sorted.

use std::cmp::Ordering;

/// A node of the clue tree
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_string(),
            left: None,
            right: None,
        })
    }
}

/// Sorted, duplicate-free set of collected clues
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue to the index
    ///
    /// Returns true when a new node was created. Empty text and clues that are
    /// already present leave the index untouched.
    pub fn insert(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let mut inserted = false;
        self.root = insert_node(self.root.take(), text, &mut inserted);
        if inserted {
            self.len += 1;
            tracing::debug!(clue = text, total = self.len, "clue indexed");
        }
        inserted
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            node = match text.as_bytes().cmp(current.text.as_bytes()) {
                Ordering::Less => current.left.as_deref(),
                Ordering::Greater => current.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Call `visit` on every clue in ascending order
    pub fn traverse_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&str),
    {
        visit_in_order(self.root.as_deref(), &mut visit);
    }

    /// Iterate the clues in ascending order
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    pub fn to_vec(&self) -> Vec<String> {
        let mut clues = Vec::with_capacity(self.len);
        self.traverse_in_order(|text| clues.push(text.to_string()));
        clues
    }

    /// Height of the tree; an empty index has height 0
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Drop every node children first, returning how many were released
    pub fn release(self) -> usize {
        let released = release_nodes(self.root);
        tracing::debug!(released, "clue index released");
        released
    }
}

/// Insert into the subtree and hand back its (possibly new) root
fn insert_node(
    node: Option<Box<ClueNode>>,
    text: &str,
    inserted: &mut bool,
) -> Option<Box<ClueNode>> {
    let Some(mut node) = node else {
        *inserted = true;
        return Some(ClueNode::new(text));
    };

    match text.as_bytes().cmp(node.text.as_bytes()) {
        Ordering::Less => node.left = insert_node(node.left.take(), text, inserted),
        Ordering::Greater => node.right = insert_node(node.right.take(), text, inserted),
        Ordering::Equal => {}
    }
    Some(node)
}

fn visit_in_order<F>(node: Option<&ClueNode>, visit: &mut F)
where
    F: FnMut(&str),
{
    if let Some(node) = node {
        visit_in_order(node.left.as_deref(), visit);
        visit(&node.text);
        visit_in_order(node.right.as_deref(), visit);
    }
}

fn height(node: Option<&ClueNode>) -> usize {
    node.map_or(0, |node| {
        1 + height(node.left.as_deref()).max(height(node.right.as_deref()))
    })
}

fn release_nodes(node: Option<Box<ClueNode>>) -> usize {
    let Some(node) = node else {
        return 0;
    };
    let ClueNode { left, right, .. } = *node;
    release_nodes(left) + release_nodes(right) + 1
}

/// In-order iterator over a [`ClueIndex`]
pub struct Iter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.text)
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a str> for ClueIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut index = ClueIndex::new();
        for text in iter {
            index.insert(text);
        }
        index
    }
}
