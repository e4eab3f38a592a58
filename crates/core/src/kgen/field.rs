use super::Maker;
use crate::error::{Error, Result};

/// A property declaration:
/// `[private ][override ][lateinit ]val|var name[: Type][ = default]`
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    type_name: String,
    default_value: Option<String>,
    is_private: bool,
    is_override: bool,
    is_late_init: bool,
    is_var: bool,
}

impl Field {
    /// An empty `type_name` leaves the type to inference, which requires a
    /// default value
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default_value: None,
            is_private: false,
            is_override: false,
            is_late_init: false,
            is_var: false,
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    /// Implement a property declared by a supertype
    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// `lateinit` implies `var`
    pub fn late_init(mut self) -> Self {
        self.is_late_init = true;
        self.is_var = true;
        self
    }

    pub fn as_var(mut self) -> Self {
        self.is_var = true;
        self
    }
}

impl Maker for Field {
    fn make(&self) -> Result<String> {
        let private_modifier = if self.is_private { "private " } else { "" };
        let override_modifier = if self.is_override { "override " } else { "" };
        let late_init_modifier = if self.is_late_init { "lateinit " } else { "" };
        let val_modifier = if self.is_var { "var" } else { "val" };
        let prefix = format!(
            "{private_modifier}{override_modifier}{late_init_modifier}{val_modifier} {}",
            self.name
        );

        if self.type_name.is_empty() {
            return match self.default_value.as_deref() {
                Some(default) if !default.is_empty() => Ok(format!("{prefix} = {default}")),
                _ => Err(Error::InvalidFieldDefinition {
                    field: self.name.clone(),
                }),
            };
        }

        let mut out = format!("{prefix}: {}", self.type_name);
        if let Some(default) = &self.default_value {
            out.push_str(" = ");
            out.push_str(default);
        }
        Ok(out)
    }
}
