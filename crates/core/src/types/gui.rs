use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lifecycle hooks a GUI type may implement to receive callbacks from
/// generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GuiEvent {
    Tick,
    TickWithInfo,
    Render,
}

/// Facts recovered from a user GUI declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuiInfo {
    pub package_name: String,
    pub simple_name: String,
    pub qualified_name: String,
    pub events: BTreeSet<GuiEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<StateSchema>,
}

impl GuiInfo {
    pub fn has_event(&self, event: GuiEvent) -> bool {
        self.events.contains(&event)
    }

    /// Either tick flavour
    pub fn ticks(&self) -> bool {
        self.has_event(GuiEvent::Tick) || self.has_event(GuiEvent::TickWithInfo)
    }
}

/// The replicated state record a GUI exposes through its `state` property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSchema {
    pub package_name: String,
    pub simple_name: String,
    pub qualified_name: String,
    /// Fields in declaration order
    pub properties: Vec<StateProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateProperty {
    pub name: String,
    /// Qualified name of the declared type
    pub type_name: String,
    pub kind: PrimitiveKind,
    pub buf_writer: String,
    pub buf_reader: String,
}

/// Value kinds a state field may have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Text,
    Uuid,
    Date,
    Identifier,
    Component,
    BlockPos,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 11] = [
        PrimitiveKind::Integer,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Boolean,
        PrimitiveKind::Text,
        PrimitiveKind::Uuid,
        PrimitiveKind::Date,
        PrimitiveKind::Identifier,
        PrimitiveKind::Component,
        PrimitiveKind::BlockPos,
    ];

    /// The name used in `read<Kind>`/`write<Kind>` buffer accessors
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Integer => "Integer",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Text => "Text",
            PrimitiveKind::Uuid => "Uuid",
            PrimitiveKind::Date => "Date",
            PrimitiveKind::Identifier => "Identifier",
            PrimitiveKind::Component => "Component",
            PrimitiveKind::BlockPos => "BlockPos",
        }
    }

    pub fn reader(self) -> String {
        format!("read{}", self.name())
    }

    pub fn writer(self) -> String {
        format!("write{}", self.name())
    }
}
