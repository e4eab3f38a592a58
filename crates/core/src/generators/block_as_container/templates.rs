//! Template set rendering a container family

use super::{abstract_block, block_entity, initializer, inventory, screen, screen_handler};
use crate::{config::GeneratorConfig, kgen::Source, types::ValidatedInput};

/// Builds the source units the container generator emits
pub trait FamilyTemplates {
    /// The companion units for one validated input, in emission order
    fn family(&self, input: &ValidatedInput, config: &GeneratorConfig) -> Vec<Source>;

    /// The aggregate initializer for every processed input
    fn initializer(&self, processed: &[ValidatedInput], config: &GeneratorConfig) -> Source;
}

/// Fabric block, block entity, screen handler and screen
#[derive(Debug, Default, Clone, Copy)]
pub struct FabricTemplates;

impl FamilyTemplates for FabricTemplates {
    fn family(&self, input: &ValidatedInput, config: &GeneratorConfig) -> Vec<Source> {
        vec![
            abstract_block::source(input, config),
            inventory::source(input),
            block_entity::source(input, config),
            screen_handler::source(input, config),
            screen::source(input, config),
        ]
    }

    fn initializer(&self, processed: &[ValidatedInput], config: &GeneratorConfig) -> Source {
        initializer::source(processed, config)
    }
}
