// Core business logic exports
pub mod feed;
pub mod matches;
pub mod reconciler;

pub use feed::{clamp_limit, select_candidates};
pub use matches::assemble;
pub use reconciler::{decide, Decision};
