use tree_sitter::LanguageError;

/// Failure to turn a grammar handle into a usable language.
///
/// Every variant renders with the same `Error loading Ucode grammar` prefix so
/// callers that only surface the message see one consistent failure.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Error loading Ucode grammar: the grammar handle is null")]
    NullHandle,

    #[error("Error loading Ucode grammar: ABI version {version} is outside {min}..={max}")]
    IncompatibleVersion {
        version: usize,
        min: usize,
        max: usize,
        #[source]
        source: LanguageError,
    },
}

impl LoadError {
    pub(crate) fn incompatible(version: usize, source: LanguageError) -> Self {
        Self::IncompatibleVersion {
            version,
            min: tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION,
            max: tree_sitter::LANGUAGE_VERSION,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
