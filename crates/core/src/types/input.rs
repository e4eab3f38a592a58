use std::sync::Arc;

use super::{CompanionNames, GuiInfo};
use crate::interfaces::SymbolInfo;

/// A declaration carrying the marker annotation, as found during discovery
#[derive(Debug, Clone)]
pub struct AnnotatedInput {
    pub declaration: Arc<dyn SymbolInfo>,
}

/// Annotation arguments after defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerArgs {
    pub item_count: u32,
    /// Qualified name of the referenced GUI type
    pub gui: String,
    pub auto_register_block: bool,
}

/// An input that passed every precondition and is ready for emission
#[derive(Debug, Clone)]
pub struct ValidatedInput {
    pub declaration: Arc<dyn SymbolInfo>,
    pub qualified_name: String,
    pub args: ContainerArgs,
    pub gui: GuiInfo,
    pub names: CompanionNames,
}

impl ValidatedInput {
    pub fn package_name(&self) -> &str {
        self.declaration.package_name()
    }

    pub fn simple_name(&self) -> &str {
        self.declaration.simple_name()
    }
}
