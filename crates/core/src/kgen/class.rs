use super::declaration::{Body, Declaration, Keyword};
use super::{Constructor, Field, Fun, Maker, PrimaryConstructor, join};
use crate::error::Result;

/// A `class` declaration
#[derive(Debug)]
pub struct Class {
    decl: Declaration,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            decl: Declaration::new(Keyword::Class, name),
        }
    }

    /// Add an annotation, written without the leading `@`
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.decl.attribute(attribute.into());
        self
    }

    pub fn with_inherits(mut self, inherits: Inherits) -> Self {
        self.decl.inherits(inherits);
        self
    }

    /// Replace the body with verbatim text
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.decl.raw(raw.into());
        self
    }

    pub fn with_companion(mut self, companion: CompanionObject) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.companion = Some(companion);
        }
        self
    }

    pub fn with_primary_constructor(mut self, ctor: PrimaryConstructor) -> Self {
        self.decl.primary_constructor(ctor);
        self
    }

    pub fn with_init(mut self, init: impl Into<String>) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.init = Some(init.into());
        }
        self
    }

    pub fn with_constructor(mut self, ctor: Constructor) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.constructors.push(ctor);
        }
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.fields.push(field);
        }
        self
    }

    pub fn with_fun(mut self, fun: Fun) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.functions.push(fun);
        }
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.decl.set_abstract(is_abstract);
        self
    }

    pub fn body(&self) -> &Body {
        self.decl.body()
    }
}

impl Maker for Class {
    fn make(&self) -> Result<String> {
        self.decl.make()
    }
}

/// An `interface` declaration
#[derive(Debug)]
pub struct Interface {
    decl: Declaration,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            decl: Declaration::new(Keyword::Interface, name),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.decl.attribute(attribute.into());
        self
    }

    pub fn with_inherits(mut self, inherits: Inherits) -> Self {
        self.decl.inherits(inherits);
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.decl.raw(raw.into());
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.fields.push(field);
        }
        self
    }

    pub fn with_fun(mut self, fun: Fun) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.functions.push(fun);
        }
        self
    }

    pub fn body(&self) -> &Body {
        self.decl.body()
    }
}

impl Maker for Interface {
    fn make(&self) -> Result<String> {
        self.decl.make()
    }
}

/// An `object` declaration
#[derive(Debug)]
pub struct Singleton {
    decl: Declaration,
}

impl Singleton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            decl: Declaration::new(Keyword::Object, name),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.decl.attribute(attribute.into());
        self
    }

    pub fn with_inherits(mut self, inherits: Inherits) -> Self {
        self.decl.inherits(inherits);
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.decl.raw(raw.into());
        self
    }

    pub fn with_init(mut self, init: impl Into<String>) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.init = Some(init.into());
        }
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.fields.push(field);
        }
        self
    }

    pub fn with_fun(mut self, fun: Fun) -> Self {
        if let Some(members) = self.decl.members_mut() {
            members.functions.push(fun);
        }
        self
    }

    pub fn body(&self) -> &Body {
        self.decl.body()
    }
}

impl Maker for Singleton {
    fn make(&self) -> Result<String> {
        self.decl.make()
    }
}

/// A `companion object` nested in a class
#[derive(Debug, Default)]
pub struct CompanionObject {
    fields: Vec<Field>,
    functions: Vec<Fun>,
}

impl CompanionObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fun(mut self, fun: Fun) -> Self {
        self.functions.push(fun);
        self
    }
}

impl Maker for CompanionObject {
    fn make(&self) -> Result<String> {
        Ok(format!(
            "companion object {{\n{}\n{}\n}}",
            join(&self.fields, "\n")?,
            join(&self.functions, "\n")?
        ))
    }
}

/// A supertype reference: `Type<Generics>(CtorArgs)`
#[derive(Debug, Clone)]
pub struct Inherits {
    type_name: String,
    ctor: Option<String>,
    generics: Option<String>,
}

impl Inherits {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ctor: None,
            generics: None,
        }
    }

    /// Call the supertype constructor with these arguments
    pub fn with_ctor(mut self, args: impl Into<String>) -> Self {
        self.ctor = Some(args.into());
        self
    }

    pub fn with_generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }
}

impl Maker for Inherits {
    fn make(&self) -> Result<String> {
        let mut out = self.type_name.clone();
        if let Some(generics) = &self.generics {
            out.push_str(&format!("<{generics}>"));
        }
        if let Some(ctor) = &self.ctor {
            out.push_str(&format!("({ctor})"));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kgen::Param;

    #[test]
    fn test_inherits_segments() {
        assert_eq!(Inherits::new("SidedInventory").make().unwrap(), "SidedInventory");
        assert_eq!(
            Inherits::new("Block").with_ctor("settings").make().unwrap(),
            "Block(settings)"
        );
        assert_eq!(
            Inherits::new("HandledScreen")
                .with_ctor("handler, playerInventory, title")
                .with_generics("ChestScreenHandler")
                .make()
                .unwrap(),
            "HandledScreen<ChestScreenHandler>(handler, playerInventory, title)"
        );
    }

    #[test]
    fn test_full_class_layout() {
        let class = Class::new("AbstractChest")
            .with_attribute("Suppress(\"unused\")")
            .with_abstract(true)
            .with_primary_constructor(
                PrimaryConstructor::new().with_param(Param::new("settings", "FabricBlockSettings")),
            )
            .with_inherits(Inherits::new("Block").with_ctor("settings"))
            .with_inherits(Inherits::new("BlockEntityProvider"))
            .with_companion(CompanionObject::new().with_field(Field::new("x", "Int").with_default("1")))
            .with_field(Field::new("items", "").with_default("mutableListOf<Int>()").private())
            .with_constructor(Constructor::new().calling("this(FabricBlockSettings.of())"))
            .with_init("println(items)")
            .with_fun(Fun::new("size").returns("Int").with_body("return items.size"));

        insta::assert_snapshot!(class.make().unwrap(), @r#"
        @Suppress("unused")
        abstract class AbstractChest(settings: FabricBlockSettings): Block(settings), BlockEntityProvider {
        companion object {
        val x: Int = 1

        }
        private val items = mutableListOf<Int>()
        constructor(): this(FabricBlockSettings.of())
        init {
        println(items)
        }
        fun size(): Int {
        return items.size
        }
        }
        "#);
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(Class::new("Empty").make().unwrap(), "class Empty {\n\n\n\n\n}");
    }

    #[test]
    fn test_raw_overrides_structured_members() {
        let class = Class::new("Chest")
            .with_field(Field::new("a", "Int"))
            .with_fun(Fun::new("hidden"))
            .with_raw("val b = 2");

        assert!(matches!(class.body(), Body::Raw(_)));
        assert_eq!(class.make().unwrap(), "class Chest {\nval b = 2\n}");
    }

    #[test]
    fn test_members_added_after_raw_are_ignored() {
        let class = Class::new("Chest")
            .with_raw("val b = 2")
            .with_fun(Fun::new("hidden"))
            .with_companion(CompanionObject::new());

        assert_eq!(class.make().unwrap(), "class Chest {\nval b = 2\n}");
    }

    #[test]
    fn test_interface_with_raw_body() {
        let interface = Interface::new("ChestInventory")
            .with_attribute("FunctionalInterface")
            .with_inherits(Inherits::new("SidedInventory"))
            .with_raw("fun getItems(): List<Int>");

        assert_eq!(
            interface.make().unwrap(),
            "@FunctionalInterface\ninterface ChestInventory: SidedInventory {\nfun getItems(): List<Int>\n}"
        );
    }

    #[test]
    fn test_interface_without_supertypes() {
        let interface = Interface::new("UIState");
        assert_eq!(interface.make().unwrap(), "interface UIState {\n\n\n}");
    }

    #[test]
    fn test_singleton_with_init() {
        let object = Singleton::new("Registry")
            .with_inherits(Inherits::new("Base"))
            .with_field(Field::new("count", "Int").with_default("0").as_var())
            .with_init("count = 1")
            .with_fun(Fun::new("reset").with_body("count = 0"));

        assert_eq!(
            object.make().unwrap(),
            "object Registry: Base {\nvar count: Int = 0\ninit {\ncount = 1\n}\nfun reset() {\ncount = 0\n}\n}"
        );
    }

    #[test]
    fn test_invalid_field_fails_rendering() {
        let class = Class::new("Broken").with_field(Field::new("oops", ""));
        match class.make() {
            Err(Error::InvalidFieldDefinition { field }) => assert_eq!(field, "oops"),
            other => panic!("Expected InvalidFieldDefinition, got {other:?}"),
        }
    }
}
