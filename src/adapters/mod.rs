// Adapters layer: concrete sources and sinks for the pipeline.

pub mod memory;
pub mod stdio;

pub use memory::{MemorySink, MemorySource};
pub use stdio::{StdinSource, StdoutSink};
