//! Source builder DSL
//!
//! A tree of composable emitters that render Kotlin source text. Every node
//! implements [`Maker`]; composite nodes own their children and render them
//! in insertion order. The tree is purely textual: nothing here checks that
//! the produced program would compile.
//!
//! # Example
//! ```
//! use kgen_core::kgen::{Class, Fun, Inherits, Maker, Param, PrimaryConstructor, Source};
//!
//! let source = Source::new("my.mod", "AbstractChest")
//!     .with_import("net.minecraft.block.Block")
//!     .with_maker(
//!         Class::new("AbstractChest")
//!             .with_abstract(true)
//!             .with_primary_constructor(
//!                 PrimaryConstructor::new().with_param(Param::new("settings", "FabricBlockSettings")),
//!             )
//!             .with_inherits(Inherits::new("Block").with_ctor("settings"))
//!             .with_fun(Fun::new("init")),
//!     );
//! let text = source.make().unwrap();
//! assert!(text.starts_with("package my.mod\n\nimport net.minecraft.block.Block\n\n"));
//! ```

mod class;
mod constructor;
mod declaration;
mod field;
mod function;
mod path;
mod source;

pub use class::{Class, CompanionObject, Inherits, Interface, Singleton};
pub use constructor::{Constructor, PrimaryConstructor};
pub use declaration::{Body, Members};
pub use field::Field;
pub use function::{Fun, Param};
pub use path::escape_path;
pub use source::{Source, Verbatim};

use crate::error::Result;

/// A node of the builder tree that renders to text
pub trait Maker: std::fmt::Debug {
    fn make(&self) -> Result<String>;
}

/// Render every item and join the results with `separator`
pub(crate) fn join<T: Maker>(items: &[T], separator: &str) -> Result<String> {
    let parts = items.iter().map(Maker::make).collect::<Result<Vec<_>>>()?;
    Ok(parts.join(separator))
}
