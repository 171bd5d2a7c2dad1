use std::sync::OnceLock;

use tracing::{debug, error, trace};
use tree_sitter::{Language, Parser};

use crate::error::{LoadError, Result};
use crate::handle::GrammarHandle;

static LANGUAGE: OnceLock<Language> = OnceLock::new();

/// Turns `handle` into a [`Language`] and checks that a parser accepts it.
///
/// The check has no side effects beyond a throwaway [`Parser`], so calling it
/// repeatedly with the same handle always gives the same outcome.
pub fn load_handle(handle: GrammarHandle) -> Result<Language> {
    if handle.is_null() {
        error!("ucode grammar handle is null");
        return Err(LoadError::NullHandle);
    }

    // SAFETY: non-null, and `GrammarHandle` guarantees the descriptor is static.
    let language = unsafe { Language::from_raw(handle.as_ptr()) };
    let version = language.version();

    let mut parser = Parser::new();
    if let Err(source) = parser.set_language(&language) {
        error!(version, "tree-sitter runtime rejected the ucode grammar");
        return Err(LoadError::incompatible(version, source));
    }

    debug!(
        version,
        node_kinds = language.node_kind_count(),
        fields = language.field_count(),
        "loaded ucode grammar"
    );
    Ok(language)
}

/// Loads the bundled grammar once and hands out the cached [`Language`].
///
/// A failed load is not cached; the next call checks the grammar again.
pub fn load() -> Result<Language> {
    if let Some(language) = LANGUAGE.get() {
        trace!("reusing cached ucode grammar");
        return Ok(language.clone());
    }
    let language = load_handle(GrammarHandle::ucode())?;
    Ok(LANGUAGE.get_or_init(|| language).clone())
}
