use std::fmt;

use tree_sitter::ffi::TSLanguage;

extern "C" {
    pub(crate) fn tree_sitter_ucode() -> *const TSLanguage;
}

/// An opaque reference to a compiled grammar descriptor.
///
/// Handles are produced by the generated grammar accessor and consumed by
/// [`load_handle`](crate::load_handle), which turns them into a checked
/// [`Language`](tree_sitter::Language). The descriptor behind a handle is a
/// static, read-only table, so handles are freely copied and shared between
/// threads.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrammarHandle(*const TSLanguage);

// SAFETY: the pointee is an immutable table with static lifetime.
unsafe impl Send for GrammarHandle {}
unsafe impl Sync for GrammarHandle {}

impl GrammarHandle {
    /// The handle for the bundled ucode grammar.
    pub fn ucode() -> Self {
        // SAFETY: the generated accessor takes no arguments and has no side effects.
        Self(unsafe { tree_sitter_ucode() })
    }

    /// Wraps a raw grammar descriptor.
    ///
    /// A null pointer is accepted here and rejected when the handle is loaded.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must point to a grammar descriptor that stays valid
    /// and unmodified for the rest of the process.
    pub const unsafe fn from_raw(ptr: *const TSLanguage) -> Self {
        Self(ptr)
    }

    /// Whether the descriptor pointer is null.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// The raw descriptor pointer, for handing to the tree-sitter C API.
    pub const fn as_ptr(&self) -> *const TSLanguage {
        self.0
    }
}

impl fmt::Debug for GrammarHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GrammarHandle").field(&self.0).finish()
    }
}
