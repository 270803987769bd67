//! The animation core: per-node easing, the node chain, and the
//! fixed-period tick loop that drives them.
//!
//! Everything here is synchronous, single-mutator state — the tick loop
//! is the only timer, ticks are delivered through the app event channel,
//! and each tick advances the chain by exactly one quantum after the
//! frame for the previous state has been drawn.

pub mod chain;
pub mod ease;
pub mod node;
pub mod ticker;

pub use chain::Chain;
pub use ease::EaseState;
pub use node::ChainNode;
pub use ticker::TickLoop;
