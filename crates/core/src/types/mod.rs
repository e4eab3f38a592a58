pub mod declaration;
pub mod gui;
pub mod input;
pub mod location;
pub mod names;

// Re-export commonly used types
pub use declaration::{
    AnnotationArgument, AnnotationDecl, AnnotationValue, ClassDeclaration, FunctionDecl,
    ParamDecl, PropertyDecl, SymbolRef,
};
pub use gui::{GuiEvent, GuiInfo, PrimitiveKind, StateProperty, StateSchema};
pub use input::{AnnotatedInput, ContainerArgs, ValidatedInput};
pub use location::Location;
pub use names::{CompanionNames, capitalize_first, qualify};
