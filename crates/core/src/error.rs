use std::io;

/// Errors that can occur while rendering or emitting generated sources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Field {field} has no type and no default value")]
    InvalidFieldDefinition { field: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Emission error: {0}")]
    EmissionError(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for kgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures found while validating one annotated declaration.
///
/// These never abort a round: each one is reported once against the
/// offending declaration and processing moves on to the next input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{annotation} cannot be applied to companion objects")]
    CompanionObjectTarget { annotation: String },

    #[error("{annotation} must be applied to a top-level class, {name} has no qualified name")]
    LocalDeclaration { annotation: String, name: String },

    #[error("{annotation} requires the existence of a primary constructor with a {settings_type} parameter")]
    MissingSettingsConstructor {
        annotation: String,
        settings_type: String,
    },

    #[error("{annotation} requires a companion object")]
    MissingCompanionObject { annotation: String },

    #[error("{annotation} requires the existence of an ID companion object member of type {identifier_type}")]
    MissingIdentifier {
        annotation: String,
        identifier_type: String,
    },

    #[error("{annotation} itemCount must be a positive integer, got {value}")]
    InvalidItemCount { annotation: String, value: i64 },

    #[error("{annotation} requires the existence of a gui class")]
    MissingGuiClass { annotation: String },

    #[error("GUI {name} must be a top-level class")]
    GuiNotTopLevel { name: String },

    #[error("{annotation} requires that the provided GUI type {name} implements {capability}")]
    GuiMissingCapability {
        annotation: String,
        name: String,
        capability: String,
    },

    #[error("GUI tick function must return kotlin.Boolean (true = the state will be sent to the clients, false = nothing important happened), found {found}")]
    InvalidTickReturnType { found: String },

    #[error("GUI tick function must take no parameters or ({world_type}, {position_type})")]
    UnsupportedTickSignature {
        world_type: String,
        position_type: String,
    },

    #[error("GUI render function must have a single parameter of type {container_type}")]
    InvalidRenderSignature { container_type: String },

    #[error("GUI state {name} must be mutable")]
    ImmutableStateField { name: String },

    #[error("GUI state {name} must be of type {marker}")]
    StateNotUIState { name: String, marker: String },

    #[error("Unsupported type {type_name} for state property {property}")]
    UnsupportedStateFieldType { property: String, type_name: String },

    #[error("{annotation} requires the inheritance of {expected}")]
    MissingAbstractBase { annotation: String, expected: String },
}
