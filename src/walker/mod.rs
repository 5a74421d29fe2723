//! The recursive track walker.
//!
//! The walker advances a path one tile at a time. Each tile class has its own
//! rule deciding whether the track continues, dead-ends or forks:
//!
//! - **Blank**: dead end
//! - **Track** (`-`, `|`): continue along the axis, or across it when crossing under
//! - **Corner** (`+`): must turn; exactly one side may continue
//! - **Waypoint**: behaves as track or corner, but never sits on a fork
//! - **End**: completes the path if nothing continues past it
//! - **Anything else**: ambiguous
//!
//! Probes from the same tile are merged with [`Verdict::merge`].

mod dispatch;
mod verdict;

pub use dispatch::{Walker, MAX_VISITS};
pub use verdict::Verdict;
