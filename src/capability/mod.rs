//! External collaborator capabilities
//!
//! The shell core never draws, prints, or shows a dialog itself. Everything
//! it needs from the outside world comes through these three traits:
//!
//! - [`RichTextSurface`] - the editing widget that owns the actual text
//! - [`StorageCapability`] - file existence/read/write/canonicalization
//! - [`InteractivePrompts`] - modal dialogs (open/save targets, the
//!   save-discard-cancel prompt, color picking)
//!
//! All calls are synchronous: a prompt blocks until the user answers or
//! dismisses it, then control returns to the registry.

use std::path::{Path, PathBuf};

use crate::error::SessionError;
use crate::format::{Alignment, CharacterFormat, ContentFormat, ListStyle, Rgb};

pub mod dialogs;
pub mod storage;

pub use dialogs::NativeDialogs;
pub use storage::DiskStorage;

/// The rich-text editing widget backing one document session.
///
/// The surface owns content, layout, undo/redo, and selection; the session
/// only asks it for bytes, hands it bytes, and forwards formatting actions.
pub trait RichTextSurface {
    /// Replace the surface content. Does not count as a user edit: the
    /// change notification is cleared.
    fn set_content(&mut self, bytes: &[u8], format: ContentFormat);

    /// Serialize the current content for persistence
    fn content_bytes(&self) -> Vec<u8>;

    /// Whether a non-empty selection exists (drives command enablement)
    fn has_selection(&self) -> bool;

    /// Drain the content-change notification: true if any edit happened
    /// since the last call
    fn take_content_changed(&mut self) -> bool;

    /// Merge a character format into the current selection
    fn apply_character_format(&mut self, fmt: &CharacterFormat);

    /// Set paragraph alignment at the cursor
    fn set_alignment(&mut self, alignment: Alignment);

    /// Apply a list style to the current paragraph; `None` resets the
    /// paragraph to default block formatting
    fn set_list_style(&mut self, style: Option<ListStyle>);
}

/// Filesystem access used for document persistence
pub trait StorageCapability {
    fn exists(&self, path: &Path) -> bool;

    fn read_all(&self, path: &Path) -> Result<Vec<u8>, SessionError>;

    fn write_document(&self, path: &Path, content: &[u8]) -> Result<(), SessionError>;

    /// Resolve symlinks and relative segments. Used as the deduplication
    /// key for open-or-focus; implementations fall back to the input path
    /// when resolution fails (e.g. the file does not exist yet).
    fn resolve_canonical(&self, path: &Path) -> PathBuf;
}

/// Result of the three-way save prompt shown before closing a dirty document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// Modal dialogs. Every method can report cancellation; cancellation is a
/// benign outcome, never an error.
pub trait InteractivePrompts {
    /// Pick a save target, pre-filled from the suggested path. `None`
    /// means the user cancelled.
    fn choose_save_target(&self, suggested: &Path) -> Option<PathBuf>;

    /// Pick a file to open. `None` means the user cancelled.
    fn choose_open_target(&self) -> Option<PathBuf>;

    /// Ask whether a modified document should be saved before closing.
    /// Dialog dismissal maps to [`SaveChoice::Cancel`].
    fn confirm_save_discard_cancel(&self, doc_name: &str) -> SaveChoice;

    /// Pick a text color. Defaults to `None` (no picker available);
    /// GUI embedders override this with their toolkit's color dialog.
    fn pick_color(&self, _current: Rgb) -> Option<Rgb> {
        None
    }
}

// ============================================================================
// Test doubles
// ============================================================================
