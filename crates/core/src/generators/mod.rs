//! Generators driven by the round processor
//!
//! [`LibGenerator`] emits the runtime contract surface every generated
//! container depends on; [`BlockAsContainer`] turns annotated classes into
//! container block families.

pub mod block_as_container;
pub mod imports;
pub mod lib_generator;

pub use block_as_container::BlockAsContainer;
pub use lib_generator::LibGenerator;

use crate::{
    error::Result,
    interfaces::EmissionSink,
    kgen::{Maker, Source},
};

/// Render a source unit and hand it to the sink
pub fn emit_source(sink: &mut dyn EmissionSink, source: &Source) -> Result<()> {
    let text = source.make()?;
    tracing::debug!(
        "Emitting {}.{} ({} bytes)",
        source.package_name(),
        source.file_name(),
        text.len()
    );
    sink.emit(source.package_name(), source.file_name(), &text)
}
