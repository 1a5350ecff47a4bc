pub mod collector;
pub mod emitter;
pub mod graph;

pub use collector::Collector;
pub use emitter::{EmitOptions, Emitter};
pub use graph::{IncludeGraph, SourceFile};
