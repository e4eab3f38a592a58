//! Service implementations of the collaborator interfaces
//!
//! In-process resolvers and sinks used by the CLI host and by tests. A
//! compiler plugin host provides its own implementations instead.

pub mod diagnostics;
pub mod fs_sink;
pub mod memory_sink;
pub mod snapshot_resolver;

pub use diagnostics::{CollectingDiagnostics, TracingDiagnostics};
pub use fs_sink::FileSystemSink;
pub use memory_sink::{EmittedUnit, MemorySink};
pub use snapshot_resolver::SnapshotResolver;
