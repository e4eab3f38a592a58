//! Declaration query interface
//!
//! The fixed set of questions the generators ask about a declaration. Hosts
//! adapt their own symbol model to this trait; the core never reflects over
//! declarations in any other way.

use crate::types::{AnnotationValue, FunctionDecl, Location, ParamDecl, PropertyDecl};

/// Trait for querying one class-like declaration
pub trait SymbolInfo: std::fmt::Debug + Send + Sync {
    /// Package the declaration lives in (empty for the root package)
    fn package_name(&self) -> &str;

    /// Unqualified name
    fn simple_name(&self) -> &str;

    /// Fully-qualified name, absent for local or anonymous declarations
    fn qualified_name(&self) -> Option<&str>;

    /// Whether the declaration is a companion object
    fn is_companion_object(&self) -> bool;

    /// Parameters of the primary constructor, if there is one
    fn primary_constructor(&self) -> Option<&[ParamDecl]>;

    /// Member properties in declaration order
    fn properties(&self) -> &[PropertyDecl];

    /// Member functions in declaration order
    fn functions(&self) -> &[FunctionDecl];

    /// The companion object, if declared
    fn companion_object(&self) -> Option<&dyn SymbolInfo>;

    /// Qualified names of the direct supertypes
    fn super_types(&self) -> &[String];

    /// Named argument of an annotation applied to this declaration
    fn annotation_argument(&self, annotation: &str, name: &str) -> Option<&AnnotationValue>;

    /// Location hint used when reporting diagnostics against this declaration
    fn location(&self) -> Location {
        Location::of(self)
    }

    /// Find a member property by name
    fn property(&self, name: &str) -> Option<&PropertyDecl> {
        self.properties().iter().find(|p| p.name == name)
    }
}
