use super::{Maker, join};
use crate::error::Result;

/// A function declaration with a verbatim body
#[derive(Debug, Clone)]
pub struct Fun {
    name: String,
    params: Vec<Param>,
    body: String,
    is_override: bool,
    return_type: Option<String>,
}

impl Fun {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: String::new(),
            is_override: false,
            return_type: None,
        }
    }

    /// An `override fun`
    pub fn overriding(name: impl Into<String>) -> Self {
        Self {
            is_override: true,
            ..Self::new(name)
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = Some(type_name.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl Maker for Fun {
    fn make(&self) -> Result<String> {
        let override_modifier = if self.is_override { "override " } else { "" };
        let return_type = self
            .return_type
            .as_ref()
            .map(|t| format!(": {t}"))
            .unwrap_or_default();
        Ok(format!(
            "{override_modifier}fun {}({}){return_type} {{\n{}\n}}",
            self.name,
            join(&self.params, ", ")?,
            self.body
        ))
    }
}

/// A parameter: `name: Type[ = default]`
#[derive(Debug, Clone)]
pub struct Param {
    name: String,
    type_name: String,
    default_value: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default_value: None,
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}

impl Maker for Param {
    fn make(&self) -> Result<String> {
        let mut out = format!("{}: {}", self.name, self.type_name);
        if let Some(default) = &self.default_value {
            out.push_str(" = ");
            out.push_str(default);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_fun_with_params() {
        let fun = Fun::overriding("canInsert")
            .with_param(Param::new("slot", "Int"))
            .with_param(Param::new("dir", "Direction?"))
            .returns("Boolean")
            .with_body("return true");

        assert_eq!(
            fun.make().unwrap(),
            "override fun canInsert(slot: Int, dir: Direction?): Boolean {\nreturn true\n}"
        );
    }

    #[test]
    fn test_param_default() {
        assert_eq!(
            Param::new("name", "String").with_default("\"image\"").make().unwrap(),
            "name: String = \"image\""
        );
    }
}
