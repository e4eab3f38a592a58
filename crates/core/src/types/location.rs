use serde::{Deserialize, Serialize};
use std::fmt;

use crate::interfaces::SymbolInfo;

/// Where a diagnostic points: a declaration and optionally one of its members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Qualified name of the declaration, or its simple name when it has none
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

impl Location {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            member: None,
        }
    }

    pub fn of<S: SymbolInfo + ?Sized>(symbol: &S) -> Self {
        Self::new(
            symbol
                .qualified_name()
                .unwrap_or_else(|| symbol.simple_name()),
        )
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}.{}", self.symbol, member),
            None => f.write_str(&self.symbol),
        }
    }
}
