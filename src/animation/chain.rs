use crate::error::{ChainlineError, Result};

use super::node::ChainNode;

/// The animation chain: a fixed row of nodes, one of which is permitted
/// to ease at any time.
///
/// The cursor walks from node to node as transitions complete, bouncing
/// off the chain ends by flipping `cursor_dir` instead of moving. A
/// boundary hit is a defined edge case, not an error: the active node
/// stays put for one more transition and the walk continues the other
/// way.
#[derive(Debug)]
pub struct Chain {
    nodes: Vec<ChainNode>,
    active: usize,
    cursor_dir: i8,
}

impl Chain {
    /// Build a chain of `node_count` nodes, linked front-to-back, with
    /// the cursor on node 0 walking forward. Rejects an empty chain and
    /// zero sub-strokes up front; there is no way to recover from either
    /// at animation time.
    pub fn new(node_count: usize, regions: u16) -> Result<Self> {
        if node_count == 0 {
            return Err(ChainlineError::Animation(
                "chain needs at least one node".into(),
            ));
        }
        if regions == 0 {
            return Err(ChainlineError::Animation(
                "nodes need at least one sub-stroke".into(),
            ));
        }

        let nodes = (0..node_count)
            .map(|i| {
                let prev = i.checked_sub(1);
                let next = if i + 1 < node_count { Some(i + 1) } else { None };
                ChainNode::new(i, prev, next, regions)
            })
            .collect();

        Ok(Self {
            nodes,
            active: 0,
            cursor_dir: 1,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn cursor_dir(&self) -> i8 {
        self.cursor_dir
    }

    /// True when no transition is in progress anywhere in the chain.
    /// Only the active node can ever be mid-transition, so this is what
    /// the controller polls to know when to stop the tick loop.
    pub fn is_idle(&self) -> bool {
        self.nodes[self.active].is_idle()
    }

    /// Paint every node exactly once, in index order, handing the
    /// painter each node's current progress.
    pub fn render(&self, mut paint: impl FnMut(usize, f32)) {
        for node in &self.nodes {
            node.render(&mut paint);
        }
    }

    /// Begin a transition on the active node. No-op while it is already
    /// easing; `on_started` fires only when a transition actually began.
    pub fn request_start(&mut self, on_started: impl FnOnce()) {
        self.nodes[self.active].begin_transition(on_started);
    }

    /// Advance the animation by one tick quantum.
    ///
    /// If this step completed the active node's transition, the cursor
    /// moves one hop in `cursor_dir`, or flips `cursor_dir` and stays at
    /// a chain end. `on_stepped` fires unconditionally, once per call:
    /// it signals that an animation frame occurred, not that a node
    /// finished.
    pub fn step(&mut self, on_stepped: impl FnOnce()) {
        let mut completed = false;
        self.nodes[self.active].step(|| completed = true);

        if completed {
            let mut at_boundary = false;
            let next = self.nodes[self.active].neighbor(self.cursor_dir, || at_boundary = true);
            self.active = next;
            if at_boundary {
                self.cursor_dir = -self.cursor_dir;
            }
        }

        on_stepped();
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &[ChainNode] {
        &self.nodes
    }
}
