//! Arena-based binary search tree keyed by course id.
//!
//! Unbalanced by design: tree shape is a direct consequence of insertion
//! order and lookup degrades to O(n) on sorted input. Inserting an existing
//! key overwrites the stored course wholesale instead of creating a
//! duplicate branch, so keys stay unique and ties never occur.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::course::Course;

/// Tree node owning one course and optional child links into the arena.
#[derive(Debug)]
struct CourseNode {
    course: Course,
    /// Subtree with ids strictly less than this node's id
    left: Option<Index>,
    /// Subtree with ids strictly greater than this node's id
    right: Option<Index>,
}

/// Ordered course index backed by a generational arena.
///
/// Node links are arena indices rather than owning pointers, so teardown is
/// a single `Arena::clear` with no per-node bookkeeping.
#[derive(Debug)]
pub struct CourseCatalog {
    arena: Arena<CourseNode>,
    root: Option<Index>,
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a course, overwriting any existing course under the same id.
    ///
    /// The payload of a matching node is replaced entirely: title and
    /// prerequisites of the second insert win, nothing is merged.
    #[instrument(level = "trace", skip(self, course), fields(id = %course.id))]
    pub fn insert(&mut self, course: Course) {
        match self.root {
            Some(root) => self.insert_at(root, course),
            None => {
                let idx = self.arena.insert(CourseNode {
                    course,
                    left: None,
                    right: None,
                });
                self.root = Some(idx);
            }
        }
    }

    fn insert_at(&mut self, node_idx: Index, course: Course) {
        use std::cmp::Ordering;

        // Walk down iteratively so adversarial (sorted) input cannot blow
        // the call stack.
        let mut current = node_idx;
        loop {
            let ordering = course.id.cmp(&self.arena[current].course.id);
            match ordering {
                Ordering::Less => {
                    if let Some(left) = self.arena[current].left {
                        current = left;
                    } else {
                        let idx = self.arena.insert(CourseNode {
                            course,
                            left: None,
                            right: None,
                        });
                        self.arena[current].left = Some(idx);
                        return;
                    }
                }
                Ordering::Greater => {
                    if let Some(right) = self.arena[current].right {
                        current = right;
                    } else {
                        let idx = self.arena.insert(CourseNode {
                            course,
                            left: None,
                            right: None,
                        });
                        self.arena[current].right = Some(idx);
                        return;
                    }
                }
                Ordering::Equal => {
                    self.arena[current].course = course;
                    return;
                }
            }
        }
    }

    /// Exact lookup by id. Returns `None` on an empty catalog or when no
    /// node matches. Never mutates the tree; the returned borrow cannot
    /// outlive a later `insert` or `clear`.
    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, id: &str) -> Option<&Course> {
        use std::cmp::Ordering;

        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.arena[idx];
            match id.cmp(node.course.id.as_str()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(&node.course),
            }
        }
        None
    }

    /// Lazy in-order iterator yielding courses in ascending id order.
    ///
    /// Restartable: each call starts a fresh walk. Empty catalogs yield an
    /// empty iterator, which callers use to distinguish "nothing loaded"
    /// from "has entries".
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InOrderIter {
        InOrderIter::new(self)
    }

    /// Remove every course. Safe on an already-empty catalog; the catalog
    /// stays usable and can be reloaded afterwards.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of courses currently stored. O(1), tracked by the arena.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Longest root-to-leaf path. Diagnostic only, no balancing is done.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.subtree_depth(self.root)
    }

    fn subtree_depth(&self, node_idx: Option<Index>) -> usize {
        match node_idx {
            Some(idx) => {
                let node = &self.arena[idx];
                1 + self
                    .subtree_depth(node.left)
                    .max(self.subtree_depth(node.right))
            }
            None => 0,
        }
    }
}

impl<'a> IntoIterator for &'a CourseCatalog {
    type Item = &'a Course;
    type IntoIter = InOrderIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order traversal (left, node, right) over the catalog.
///
/// Keeps an explicit stack of the unvisited left spine instead of
/// recursing, so iteration is lazy and yields one course per `next`.
pub struct InOrderIter<'a> {
    catalog: &'a CourseCatalog,
    stack: Vec<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(catalog: &'a CourseCatalog) -> Self {
        let mut iter = Self {
            catalog,
            stack: Vec::new(),
        };
        iter.push_left_spine(catalog.root);
        iter
    }

    fn push_left_spine(&mut self, mut node_idx: Option<Index>) {
        while let Some(idx) = node_idx {
            self.stack.push(idx);
            node_idx = self.catalog.arena[idx].left;
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = &self.catalog.arena[idx];
        self.push_left_spine(node.right);
        Some(&node.course)
    }
}
