//! This crate provides ucode language support for the [tree-sitter][] parsing library.
//!
//! ucode is the template and scripting language used by OpenWrt. Source files
//! are markup with embedded `{{ expression }}`, `{% statement %}` and
//! `{# comment #}` tags, or plain scripts when they start with a `#!` line.
//!
//! Typically, you will use the [language][language func] function to add this language to a
//! tree-sitter [Parser][], and then use the parser to parse some code:
//!
//! ```
//! let code = "Hello {{ name }}!";
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_ucode::language())
//!     .expect("Error loading Ucode grammar");
//! let tree = parser.parse(code, None).unwrap();
//! assert!(!tree.root_node().has_error());
//! ```
//!
//! [`load`] performs the same setup but reports a [`LoadError`] instead of
//! leaving the compatibility check to the caller.
//!
//! [language func]: fn.language.html
//! [Parser]: https://docs.rs/tree-sitter/*/tree_sitter/struct.Parser.html
//! [tree-sitter]: https://tree-sitter.github.io/

use tree_sitter::Language;

mod error;
mod handle;
mod loader;

pub use error::{LoadError, Result};
pub use handle::GrammarHandle;
pub use loader::{load, load_handle};

/// Get the tree-sitter [Language][] for this grammar.
///
/// [Language]: https://docs.rs/tree-sitter/*/tree_sitter/struct.Language.html
pub fn language() -> Language {
    // SAFETY: the generated accessor returns a static descriptor and never null.
    unsafe { Language::from_raw(handle::tree_sitter_ucode()) }
}

/// The content of the [`node-types.json`][] file for this grammar.
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers#static-node-types
pub const NODE_TYPES: &str = include_str!("../../src/node-types.json");

/// The syntax highlighting query for ucode.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");

/// The local variable query for ucode.
pub const LOCALS_QUERY: &str = include_str!("../../queries/locals.scm");

/// The injections query for ucode (empty - ucode embeds no other languages).
pub const INJECTIONS_QUERY: &str = "";
