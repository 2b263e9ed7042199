//! Binary space partitioning over the empty map.
//!
//! The partitioner subdivides the map rectangle into a tree of containers,
//! each of which may later receive one room. Nodes live in an arena and refer
//! to each other by index, so splitting is iterative (a FIFO work-list, no
//! recursion) and the finished tree is trivial to inspect in tests.

use std::collections::VecDeque;

use glam::IVec2;
use log::debug;
use oubliette_geometry::prelude::Rect;
use oubliette_random::rng::Rng;

use crate::config::GenerationConfig;

/// Index of a [`Leaf`] inside its [`BspTree`] arena.
pub type LeafId = usize;

/// What happened when a leaf was offered the chance to split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitState {
    /// The leaf has not been processed yet.
    Unsplit,
    /// Split into top and bottom children.
    Horizontal,
    /// Split into left and right children.
    Vertical,
    /// Too small to split; the leaf is a room candidate.
    Rejected,
}

/// A node of the partition tree.
///
/// Internal nodes carry two children and never a room; terminal nodes carry
/// at most one room.
#[derive(Debug, Clone)]
pub struct Leaf {
    /// The container rectangle this leaf covers.
    pub bounds: Rect,
    /// Left (or top) child.
    pub left: Option<LeafId>,
    /// Right (or bottom) child.
    pub right: Option<LeafId>,
    /// The room placed in this leaf, if it is terminal and room creation
    /// succeeded.
    pub room: Option<Rect>,
    /// The split outcome for this leaf.
    pub state: SplitState,
}

impl Leaf {
    fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            left: None,
            right: None,
            room: None,
            state: SplitState::Unsplit,
        }
    }

    /// Returns true if this leaf has no children.
    pub const fn is_terminal(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// An arena-backed binary space partition tree.
pub struct BspTree {
    leaves: Vec<Leaf>,
}

impl BspTree {
    /// Creates a tree whose root covers `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            leaves: vec![Leaf::new(bounds)],
        }
    }

    /// The root leaf's id.
    pub const fn root(&self) -> LeafId {
        0
    }

    /// All leaves in creation order.
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Mutable access to a leaf.
    pub fn leaf_mut(&mut self, id: LeafId) -> &mut Leaf {
        &mut self.leaves[id]
    }

    /// Ids of every terminal leaf, in creation order.
    pub fn terminal_leaves(&self) -> Vec<LeafId> {
        (0..self.leaves.len())
            .filter(|&id| self.leaves[id].is_terminal())
            .collect()
    }

    /// Runs the split work-list.
    ///
    /// Leaves are processed first-in-first-out starting from the root. Each
    /// successful split consumes one unit of `split_iterations` and enqueues
    /// both children; a leaf that is too small is marked
    /// [`SplitState::Rejected`] and dropped from the list. The loop ends when
    /// the budget or the work-list runs out.
    pub fn split(&mut self, split_iterations: i32, config: &GenerationConfig, rng: &mut Rng) {
        let mut work_list = VecDeque::new();
        work_list.push_back(self.root());
        let mut budget = split_iterations;

        while budget > 0 {
            let Some(id) = work_list.pop_front() else {
                break;
            };
            if let Some((left, right)) = self.split_leaf(id, config, rng) {
                debug!("split leaf {id}, budget now {}", budget - 1);
                work_list.push_back(left);
                work_list.push_back(right);
                budget -= 1;
            }
        }
    }

    /// Attempts to split one leaf, returning the child ids on success.
    ///
    /// A leaf may split only if both dimensions can hold two children of at
    /// least the minimum container size plus the shared wall line between
    /// them. The orientation follows the container's aspect ratio when it is
    /// pronounced (over 1.25 either way) and a coin flip otherwise. The
    /// shared line is included in both children's bounds: they abut, their
    /// interiors do not overlap.
    fn split_leaf(
        &mut self,
        id: LeafId,
        config: &GenerationConfig,
        rng: &mut Rng,
    ) -> Option<(LeafId, LeafId)> {
        let bounds = self.leaves[id].bounds;
        let min_size = config.min_container_size;

        if bounds.width() < 2 * min_size + 1 || bounds.height() < 2 * min_size + 1 {
            self.leaves[id].state = SplitState::Rejected;
            return None;
        }

        let width = bounds.width() as f32;
        let height = bounds.height() as f32;
        let vertical = if width > 1.25 * height {
            true
        } else if height > 1.25 * width {
            false
        } else {
            rng.chance(0.5)
        };

        let (left_bounds, right_bounds) = if vertical {
            let pos = rng.range(bounds.min.x + min_size, bounds.max.x - min_size);
            (
                Rect::new(bounds.min, IVec2::new(pos, bounds.max.y)),
                Rect::new(IVec2::new(pos, bounds.min.y), bounds.max),
            )
        } else {
            let pos = rng.range(bounds.min.y + min_size, bounds.max.y - min_size);
            (
                Rect::new(bounds.min, IVec2::new(bounds.max.x, pos)),
                Rect::new(IVec2::new(bounds.min.x, pos), bounds.max),
            )
        };

        let left = self.push(Leaf::new(left_bounds));
        let right = self.push(Leaf::new(right_bounds));
        let leaf = &mut self.leaves[id];
        leaf.left = Some(left);
        leaf.right = Some(right);
        leaf.state = if vertical {
            SplitState::Vertical
        } else {
            SplitState::Horizontal
        };
        Some((left, right))
    }

    fn push(&mut self, leaf: Leaf) -> LeafId {
        self.leaves.push(leaf);
        self.leaves.len() - 1
    }
}
