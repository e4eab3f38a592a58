use super::{CompanionObject, Constructor, Field, Fun, Inherits, Maker, PrimaryConstructor, join};
use crate::error::Result;

/// The body of a class-like declaration.
///
/// `Raw` replaces the whole structured body with verbatim text; switching to
/// it discards any structured members added before.
#[derive(Debug)]
pub enum Body {
    Structured(Members),
    Raw(String),
}

impl Default for Body {
    fn default() -> Self {
        Body::Structured(Members::default())
    }
}

/// Structured members of a class-like declaration
#[derive(Debug, Default)]
pub struct Members {
    pub(crate) companion: Option<CompanionObject>,
    pub(crate) fields: Vec<Field>,
    pub(crate) constructors: Vec<Constructor>,
    pub(crate) init: Option<String>,
    pub(crate) functions: Vec<Fun>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    Class,
    Interface,
    Object,
}

impl Keyword {
    fn as_str(self) -> &'static str {
        match self {
            Keyword::Class => "class",
            Keyword::Interface => "interface",
            Keyword::Object => "object",
        }
    }
}

/// Shared state and rendering for classes, interfaces and singletons
#[derive(Debug)]
pub(crate) struct Declaration {
    keyword: Keyword,
    name: String,
    attributes: Vec<String>,
    inherits: Vec<Inherits>,
    primary_constructor: Option<PrimaryConstructor>,
    is_abstract: bool,
    body: Body,
}

impl Declaration {
    pub(crate) fn new(keyword: Keyword, name: impl Into<String>) -> Self {
        Self {
            keyword,
            name: name.into(),
            attributes: Vec::new(),
            inherits: Vec::new(),
            primary_constructor: None,
            is_abstract: false,
            body: Body::default(),
        }
    }

    pub(crate) fn attribute(&mut self, attribute: String) {
        self.attributes.push(attribute);
    }

    pub(crate) fn inherits(&mut self, inherits: Inherits) {
        self.inherits.push(inherits);
    }

    pub(crate) fn primary_constructor(&mut self, ctor: PrimaryConstructor) {
        self.primary_constructor = Some(ctor);
    }

    pub(crate) fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub(crate) fn raw(&mut self, raw: String) {
        self.body = Body::Raw(raw);
    }

    pub(crate) fn body(&self) -> &Body {
        &self.body
    }

    /// Structured members, or `None` once the body is raw
    pub(crate) fn members_mut(&mut self) -> Option<&mut Members> {
        match &mut self.body {
            Body::Structured(members) => Some(members),
            Body::Raw(_) => None,
        }
    }

    fn header(&self) -> Result<String> {
        let mut header = String::new();
        for attribute in &self.attributes {
            header.push('@');
            header.push_str(attribute);
            header.push('\n');
        }
        if self.is_abstract {
            header.push_str("abstract ");
        }
        header.push_str(self.keyword.as_str());
        header.push(' ');
        header.push_str(&self.name);
        if let Some(ctor) = &self.primary_constructor {
            header.push_str(&ctor.make()?);
        }
        if !self.inherits.is_empty() {
            header.push_str(": ");
            header.push_str(&join(&self.inherits, ", ")?);
        }
        Ok(header)
    }

    fn structured(&self, members: &Members) -> Result<String> {
        let mut body = String::new();
        if self.keyword == Keyword::Class {
            if let Some(companion) = &members.companion {
                body.push_str(&companion.make()?);
                body.push('\n');
            }
        }
        body.push_str(&join(&members.fields, "\n")?);
        body.push('\n');
        if self.keyword == Keyword::Class {
            body.push_str(&join(&members.constructors, "\n")?);
            body.push('\n');
        }
        if self.keyword != Keyword::Interface {
            if let Some(init) = &members.init {
                body.push_str(&format!("init {{\n{init}\n}}"));
            }
            body.push('\n');
        }
        body.push_str(&join(&members.functions, "\n")?);
        Ok(body)
    }
}

impl Maker for Declaration {
    fn make(&self) -> Result<String> {
        let header = self.header()?;
        let body = match &self.body {
            Body::Raw(raw) => raw.clone(),
            Body::Structured(members) => self.structured(members)?,
        };
        Ok(format!("{header} {{\n{body}\n}}"))
    }
}
