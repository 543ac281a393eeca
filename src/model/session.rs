//! Document session state machine
//!
//! One session per open document. The session tracks identity (untitled
//! label vs canonical file path) and the persisted/dirty flags, and runs
//! the load/save/save-as/close-confirmation transitions against the
//! storage and prompt capabilities. The rich-text surface is owned by the
//! session but treated as an opaque collaborator.

use std::path::{Path, PathBuf};

use crate::capability::{InteractivePrompts, RichTextSurface, SaveChoice, StorageCapability};
use crate::error::SessionError;
use crate::format::{ensure_document_extension, sniff_format, Alignment, CharacterFormat, ListStyle};
use crate::model::workspace::SessionId;

/// Document identity. Unpersisted documents carry a synthetic label,
/// persisted ones a canonical path; there is no third state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentPath {
    Untitled(String),
    File(PathBuf),
}

impl DocumentPath {
    /// Name shown in the title bar and the window menu
    pub fn display_name(&self) -> String {
        match self {
            Self::Untitled(label) => label.clone(),
            Self::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    /// Path pre-filled into the save dialog
    fn suggested_save_path(&self) -> PathBuf {
        match self {
            Self::Untitled(label) => PathBuf::from(label),
            Self::File(path) => path.clone(),
        }
    }
}

/// Result of a save operation. Cancelling the save dialog is a benign
/// no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Cancelled,
}

/// One open document: its surface, identity, and dirty state
#[derive(Debug)]
pub struct DocumentSession<S: RichTextSurface> {
    pub(crate) id: Option<SessionId>,
    path: DocumentPath,
    surface: S,
    is_dirty: bool,
}

impl<S: RichTextSurface> DocumentSession<S> {
    /// Create an untitled session. Sequence numbers are handed out by the
    /// registry and never reused.
    pub fn untitled(seq: u64, surface: S) -> Self {
        Self {
            id: None,
            path: DocumentPath::Untitled(format!("Untitled {}", seq)),
            surface,
            is_dirty: false,
        }
    }

    /// Load a document from storage. Content format is sniffed from the
    /// leading bytes. The session ends persisted and clean, keyed by the
    /// canonical path.
    pub fn load(
        path: &Path,
        mut surface: S,
        storage: &dyn StorageCapability,
    ) -> Result<Self, SessionError> {
        if !storage.exists(path) {
            return Err(SessionError::NotFound);
        }

        let bytes = storage.read_all(path)?;
        let format = sniff_format(&bytes);
        surface.set_content(&bytes, format);

        let canonical = storage.resolve_canonical(path);
        tracing::info!("Loaded {} ({} bytes)", canonical.display(), bytes.len());

        Ok(Self {
            id: None,
            path: DocumentPath::File(canonical),
            surface,
            is_dirty: false,
        })
    }

    /// Registry-assigned handle, `None` until the session is registered
    pub fn id(&self) -> Option<SessionId> {
        self.id
    }

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }

    pub fn display_name(&self) -> String {
        self.path.display_name()
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self.path, DocumentPath::File(_))
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Mark the session dirty. Idempotent.
    pub fn note_content_changed(&mut self) {
        self.is_dirty = true;
    }

    /// Drain the surface's change notification into the dirty flag
    pub fn poll_surface(&mut self) {
        if self.surface.take_content_changed() {
            self.is_dirty = true;
        }
    }

    /// Save to the current path, or prompt for one if the session has
    /// never been persisted.
    pub fn save(
        &mut self,
        storage: &dyn StorageCapability,
        prompts: &dyn InteractivePrompts,
    ) -> Result<SaveOutcome, SessionError> {
        match &self.path {
            DocumentPath::File(path) => {
                if !self.is_dirty {
                    return Ok(SaveOutcome::Saved);
                }
                let path = path.clone();
                self.save_to(path, storage)
            }
            DocumentPath::Untitled(_) => self.prompt_for_target_and_save(storage, prompts),
        }
    }

    /// Prompt for a new target regardless of the current path
    pub fn save_as(
        &mut self,
        storage: &dyn StorageCapability,
        prompts: &dyn InteractivePrompts,
    ) -> Result<SaveOutcome, SessionError> {
        self.prompt_for_target_and_save(storage, prompts)
    }

    fn prompt_for_target_and_save(
        &mut self,
        storage: &dyn StorageCapability,
        prompts: &dyn InteractivePrompts,
    ) -> Result<SaveOutcome, SessionError> {
        let suggested = self.path.suggested_save_path();
        match prompts.choose_save_target(&suggested) {
            Some(target) => self.save_to(target, storage),
            None => {
                tracing::debug!("Save dialog cancelled for {}", self.display_name());
                Ok(SaveOutcome::Cancelled)
            }
        }
    }

    /// Write surface content to a specific path. The default extension is
    /// appended unless the path already carries a recognized one. On
    /// success the session becomes persisted and clean under the canonical
    /// target path; on failure nothing changes.
    pub fn save_to(
        &mut self,
        path: PathBuf,
        storage: &dyn StorageCapability,
    ) -> Result<SaveOutcome, SessionError> {
        let path = ensure_document_extension(path);
        let content = self.surface.content_bytes();
        storage.write_document(&path, &content)?;

        let canonical = storage.resolve_canonical(&path);
        tracing::info!("Saved {} ({} bytes)", canonical.display(), content.len());
        self.path = DocumentPath::File(canonical);
        self.is_dirty = false;
        Ok(SaveOutcome::Saved)
    }

    /// Decide whether the session may close. Clean sessions close without
    /// a prompt; dirty ones get the three-way save/discard/cancel prompt.
    /// Choosing Save only permits the close if the save actually completes
    /// (a cancelled save dialog or a write error keeps the session open).
    pub fn confirm_closeable(
        &mut self,
        storage: &dyn StorageCapability,
        prompts: &dyn InteractivePrompts,
    ) -> bool {
        self.poll_surface();
        if !self.is_dirty {
            return true;
        }

        match prompts.confirm_save_discard_cancel(&self.display_name()) {
            SaveChoice::Save => match self.save(storage, prompts) {
                Ok(SaveOutcome::Saved) => true,
                Ok(SaveOutcome::Cancelled) => false,
                Err(e) => {
                    tracing::warn!("Save before close failed: {}", e);
                    false
                }
            },
            SaveChoice::Discard => true,
            SaveChoice::Cancel => false,
        }
    }

    // ------------------------------------------------------------------
    // Formatting passthroughs. Each marks the session dirty: the embedder
    // invokes these from menu actions, which are edits even when the
    // surface's own change notification lags.
    // ------------------------------------------------------------------

    pub fn apply_character_format(&mut self, fmt: &CharacterFormat) {
        self.surface.apply_character_format(fmt);
        self.is_dirty = true;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.surface.set_alignment(alignment);
        self.is_dirty = true;
    }

    pub fn set_list_style(&mut self, style: Option<ListStyle>) {
        self.surface.set_list_style(style);
        self.is_dirty = true;
    }
}
