use serde::{Deserialize, Serialize};

use crate::interfaces::SymbolInfo;

/// A snapshot of one class-like declaration as seen by the symbol resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassDeclaration {
    #[serde(default)]
    pub package_name: String,
    pub simple_name: String,
    /// Absent for local and anonymous declarations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub is_companion_object: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_constructor: Option<Vec<ParamDecl>>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
    #[serde(default)]
    pub functions: Vec<FunctionDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion_object: Option<Box<ClassDeclaration>>,
    /// Qualified names of the direct supertypes
    #[serde(default)]
    pub super_types: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDecl>,
}

impl ClassDeclaration {
    pub fn new(package_name: impl Into<String>, simple_name: impl Into<String>) -> Self {
        let package_name = package_name.into();
        let simple_name = simple_name.into();
        let qualified_name = if package_name.is_empty() {
            simple_name.clone()
        } else {
            format!("{package_name}.{simple_name}")
        };
        Self {
            package_name,
            simple_name,
            qualified_name: Some(qualified_name),
            ..Self::default()
        }
    }

    pub fn with_primary_constructor(mut self, params: Vec<ParamDecl>) -> Self {
        self.primary_constructor = Some(params);
        self
    }

    pub fn with_property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_function(mut self, function: FunctionDecl) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_companion(mut self, companion: ClassDeclaration) -> Self {
        self.companion_object = Some(Box::new(companion));
        self
    }

    pub fn with_super_type(mut self, super_type: impl Into<String>) -> Self {
        self.super_types.push(super_type.into());
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationDecl) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Mark this declaration as a companion object
    pub fn companion(mut self) -> Self {
        self.is_companion_object = true;
        self
    }

    /// Drop the qualified name, as for a local declaration
    pub fn local(mut self) -> Self {
        self.qualified_name = None;
        self
    }

    /// Check whether this declaration carries the given annotation.
    ///
    /// Matches on the fully-qualified name when both sides have one, and on
    /// the short name otherwise.
    pub fn has_annotation(&self, annotation: &str) -> bool {
        self.find_annotation(annotation).is_some()
    }

    fn find_annotation(&self, annotation: &str) -> Option<&AnnotationDecl> {
        self.annotations
            .iter()
            .find(|a| a.name == annotation)
            .or_else(|| {
                let short = short_name(annotation);
                self.annotations.iter().find(|a| short_name(&a.name) == short)
            })
    }
}

fn short_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

impl SymbolInfo for ClassDeclaration {
    fn package_name(&self) -> &str {
        &self.package_name
    }

    fn simple_name(&self) -> &str {
        &self.simple_name
    }

    fn qualified_name(&self) -> Option<&str> {
        self.qualified_name.as_deref()
    }

    fn is_companion_object(&self) -> bool {
        self.is_companion_object
    }

    fn primary_constructor(&self) -> Option<&[ParamDecl]> {
        self.primary_constructor.as_deref()
    }

    fn properties(&self) -> &[PropertyDecl] {
        &self.properties
    }

    fn functions(&self) -> &[FunctionDecl] {
        &self.functions
    }

    fn companion_object(&self) -> Option<&dyn SymbolInfo> {
        self.companion_object
            .as_deref()
            .map(|companion| companion as &dyn SymbolInfo)
    }

    fn super_types(&self) -> &[String] {
        &self.super_types
    }

    fn annotation_argument(&self, annotation: &str, name: &str) -> Option<&AnnotationValue> {
        self.find_annotation(annotation)?
            .arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

/// A constructor or function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    /// Resolved qualified type name, absent when the type could not be resolved
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name.into()),
        }
    }
}

/// A member property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub mutable: bool,
}

impl PropertyDecl {
    pub fn val(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name.into()),
            mutable: false,
        }
    }

    pub fn var(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            mutable: true,
            ..Self::val(name, type_name)
        }
    }
}

/// A member function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParamDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn returns(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }
}

/// An annotation application with its named arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationDecl {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<AnnotationArgument>,
}

impl AnnotationDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.arguments.push(AnnotationArgument {
            name: name.into(),
            value,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationArgument {
    pub name: String,
    pub value: AnnotationValue,
}

/// A typed annotation argument value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnnotationValue {
    Int(i64),
    Bool(bool),
    /// A class literal, carried as the referenced type's qualified name
    Type(String),
    String(String),
}

impl AnnotationValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnnotationValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&str> {
        match self {
            AnnotationValue::Type(name) => Some(name),
            _ => None,
        }
    }
}

/// A reference to a declaration handed back to the host as part of a
/// continuation set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolRef(pub String);

impl SymbolRef {
    pub fn of(symbol: &dyn SymbolInfo) -> Self {
        Self(symbol.location().symbol)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
