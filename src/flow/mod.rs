pub mod change;
pub mod edge;
pub mod graph;
pub mod node;
pub mod snapshot;

pub use change::*;
pub use edge::*;
pub use graph::*;
pub use node::*;
pub use snapshot::*;
