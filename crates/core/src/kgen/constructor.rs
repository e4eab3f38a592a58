use super::{Maker, Param, join};
use crate::error::Result;

/// The parameter list written after the class name
#[derive(Debug, Clone, Default)]
pub struct PrimaryConstructor {
    params: Vec<Param>,
}

impl PrimaryConstructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }
}

impl Maker for PrimaryConstructor {
    fn make(&self) -> Result<String> {
        Ok(format!("({})", join(&self.params, ", ")?))
    }
}

/// A secondary `constructor(...)`, optionally delegating and with a body
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    params: Vec<Param>,
    upper_calling: Option<String>,
    body: Option<String>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Delegation call, e.g. `super(TYPE, syncId)`
    pub fn calling(mut self, upper_calling: impl Into<String>) -> Self {
        self.upper_calling = Some(upper_calling.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Maker for Constructor {
    fn make(&self) -> Result<String> {
        let mut out = format!("constructor({})", join(&self.params, ", ")?);
        if let Some(upper) = &self.upper_calling {
            out.push_str(": ");
            out.push_str(upper);
        }
        if let Some(body) = &self.body {
            out.push_str(&format!("{{\n{body}\n}}"));
        }
        Ok(out)
    }
}
