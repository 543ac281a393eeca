//! Workspace registry
//!
//! The ordered set of open document sessions. Owns session identity
//! (handles and the untitled-label counter), active-session tracking,
//! open-or-focus deduplication by canonical path, window-menu generation,
//! and command enablement.

use std::collections::HashMap;
use std::path::Path;

use crate::capability::{InteractivePrompts, RichTextSurface, StorageCapability};
use crate::commands::{CommandId, ALWAYS_COMMANDS, SELECTION_COMMANDS, SESSION_COMMANDS};
use crate::error::SessionError;
use crate::model::session::{DocumentPath, DocumentSession};

/// Stable handle for a registered session. Handles are never reused,
/// so a stale handle simply resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// One line of the window-list menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMenuEntry {
    /// 1-based position in creation order
    pub index: usize,
    pub id: SessionId,
    pub name: String,
    pub is_active: bool,
}

/// The set of open sessions, in creation order
#[derive(Debug)]
pub struct WorkspaceRegistry<S: RichTextSurface> {
    sessions: Vec<DocumentSession<S>>,
    active: Option<SessionId>,
    next_session_id: u64,
    next_untitled: u64,
}

impl<S: RichTextSurface> Default for WorkspaceRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RichTextSurface> WorkspaceRegistry<S> {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            active: None,
            next_session_id: 1,
            next_untitled: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn sessions(&self) -> &[DocumentSession<S>] {
        &self.sessions
    }

    pub fn session(&self, id: SessionId) -> Option<&DocumentSession<S>> {
        self.sessions.iter().find(|s| s.id == Some(id))
    }

    pub fn session_mut(&mut self, id: SessionId) -> Option<&mut DocumentSession<S>> {
        self.sessions.iter_mut().find(|s| s.id == Some(id))
    }

    pub fn active_id(&self) -> Option<SessionId> {
        self.active
    }

    pub fn active_session(&self) -> Option<&DocumentSession<S>> {
        self.session(self.active?)
    }

    pub fn active_session_mut(&mut self) -> Option<&mut DocumentSession<S>> {
        self.session_mut(self.active?)
    }

    /// Assign a handle, append, and focus
    fn register(&mut self, mut session: DocumentSession<S>) -> SessionId {
        let id = SessionId(self.next_session_id);
        self.next_session_id += 1;
        session.id = Some(id);
        self.sessions.push(session);
        self.active = Some(id);
        id
    }

    /// Create and focus a fresh untitled document. Never deduplicated;
    /// untitled sequence numbers are never reused.
    pub fn create_new_document(&mut self, surface: S) -> SessionId {
        let seq = self.next_untitled;
        self.next_untitled += 1;
        let session = DocumentSession::untitled(seq, surface);
        tracing::debug!("Created {}", session.display_name());
        self.register(session)
    }

    /// Open a document, or focus the session that already holds it.
    ///
    /// Deduplication is by canonical path, so two spellings of the same
    /// file land in one session. On a load failure nothing is inserted and
    /// the workspace is unchanged.
    pub fn open_or_focus(
        &mut self,
        path: &Path,
        make_surface: impl FnOnce() -> S,
        storage: &dyn StorageCapability,
    ) -> Result<SessionId, SessionError> {
        let canonical = storage.resolve_canonical(path);
        let existing = self.sessions.iter().find_map(|s| match s.path() {
            DocumentPath::File(p) if *p == canonical => s.id(),
            _ => None,
        });
        if let Some(id) = existing {
            tracing::debug!("Focusing already-open {}", canonical.display());
            self.active = Some(id);
            return Ok(id);
        }

        let session = DocumentSession::load(path, make_surface(), storage)?;
        Ok(self.register(session))
    }

    /// Focus a session by handle. Returns false for stale handles.
    pub fn activate(&mut self, id: SessionId) -> bool {
        if self.session(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    fn active_index(&self) -> Option<usize> {
        let active = self.active?;
        self.sessions.iter().position(|s| s.id == Some(active))
    }

    /// Cycle focus forward in creation order, wrapping at the end
    pub fn activate_next(&mut self) -> Option<SessionId> {
        if self.sessions.is_empty() {
            return None;
        }
        let idx = match self.active_index() {
            Some(i) => (i + 1) % self.sessions.len(),
            None => 0,
        };
        self.active = self.sessions[idx].id();
        self.active
    }

    /// Cycle focus backward in creation order, wrapping at the start
    pub fn activate_previous(&mut self) -> Option<SessionId> {
        if self.sessions.is_empty() {
            return None;
        }
        let idx = match self.active_index() {
            Some(i) => (i + self.sessions.len() - 1) % self.sessions.len(),
            None => self.sessions.len() - 1,
        };
        self.active = self.sessions[idx].id();
        self.active
    }

    fn remove(&mut self, id: SessionId) {
        self.sessions.retain(|s| s.id != Some(id));
        if self.active == Some(id) {
            self.active = self.sessions.last().and_then(|s| s.id());
        }
    }

    /// Close the active session if its close confirmation permits it.
    /// Returns true when a session was closed (or none was open).
    pub fn close_active(
        &mut self,
        storage: &dyn StorageCapability,
        prompts: &dyn InteractivePrompts,
    ) -> bool {
        let Some(id) = self.active else {
            return true;
        };
        let Some(session) = self.session_mut(id) else {
            return true;
        };

        if session.confirm_closeable(storage, prompts) {
            tracing::debug!("Closing session {:?}", id);
            self.remove(id);
            true
        } else {
            false
        }
    }

    /// Close every session that agrees to close. Each session is asked
    /// independently; one refusal does not stop the others. Returns true
    /// only if the workspace ends empty.
    pub fn close_all(
        &mut self,
        storage: &dyn StorageCapability,
        prompts: &dyn InteractivePrompts,
    ) -> bool {
        let ids: Vec<SessionId> = self.sessions.iter().filter_map(|s| s.id()).collect();
        let mut all_closed = true;

        for id in ids {
            let Some(session) = self.session_mut(id) else {
                continue;
            };
            if session.confirm_closeable(storage, prompts) {
                self.remove(id);
            } else {
                all_closed = false;
            }
        }

        all_closed
    }

    /// Window-list menu entries, numbered 1..=n in creation order
    pub fn window_menu(&self) -> Vec<WindowMenuEntry> {
        self.sessions
            .iter()
            .enumerate()
            .filter_map(|(i, s)| {
                let id = s.id()?;
                Some(WindowMenuEntry {
                    index: i + 1,
                    id,
                    name: s.display_name(),
                    is_active: self.active == Some(id),
                })
            })
            .collect()
    }

    /// Per-command enabled state for the current workspace shape
    pub fn command_enablement(&self) -> HashMap<CommandId, bool> {
        let has_session = self.active_session().is_some();
        let has_selection = self
            .active_session()
            .map(|s| s.surface().has_selection())
            .unwrap_or(false);

        let mut map = HashMap::new();
        for &id in SESSION_COMMANDS {
            map.insert(id, has_session);
        }
        for &id in SELECTION_COMMANDS {
            map.insert(id, has_selection);
        }
        for &id in ALWAYS_COMMANDS {
            map.insert(id, true);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::testing::{MemoryStorage, ScriptedPrompts};
    use crate::capability::SaveChoice;
    use crate::surface::PlainTextSurface;
    use std::path::PathBuf;

    fn registry() -> WorkspaceRegistry<PlainTextSurface> {
        WorkspaceRegistry::new()
    }

    // ========================================================================
    // Creation and untitled numbering
    // ========================================================================

    #[test]
    fn test_new_documents_are_numbered_and_focused() {
        let mut reg = registry();
        let a = reg.create_new_document(PlainTextSurface::new());
        let b = reg.create_new_document(PlainTextSurface::new());

        assert_eq!(reg.session(a).unwrap().display_name(), "Untitled 1");
        assert_eq!(reg.session(b).unwrap().display_name(), "Untitled 2");
        assert_eq!(reg.active_id(), Some(b));
    }

    #[test]
    fn test_untitled_numbers_are_never_reused() {
        let storage = MemoryStorage::default();
        let prompts = ScriptedPrompts::default();
        let mut reg = registry();

        reg.create_new_document(PlainTextSurface::new());
        assert!(reg.close_active(&storage, &prompts));

        let next = reg.create_new_document(PlainTextSurface::new());
        assert_eq!(reg.session(next).unwrap().display_name(), "Untitled 2");
    }

    #[test]
    fn test_new_documents_are_never_deduplicated() {
        let mut reg = registry();
        reg.create_new_document(PlainTextSurface::new());
        reg.create_new_document(PlainTextSurface::new());
        assert_eq!(reg.len(), 2);
    }

    // ========================================================================
    // Open-or-focus
    // ========================================================================

    #[test]
    fn test_open_same_path_twice_yields_one_session() {
        let storage = MemoryStorage::with_file("/docs/report.html", b"text");
        let mut reg = registry();

        let first = reg
            .open_or_focus(Path::new("/docs/report.html"), PlainTextSurface::new, &storage)
            .unwrap();
        reg.create_new_document(PlainTextSurface::new());
        let second = reg
            .open_or_focus(Path::new("/docs/report.html"), PlainTextSurface::new, &storage)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(reg.len(), 2, "the untitled plus one file session");
        assert_eq!(reg.active_id(), Some(first));
    }

    #[test]
    fn test_open_failure_inserts_nothing() {
        let storage = MemoryStorage::default();
        let mut reg = registry();

        let result =
            reg.open_or_focus(Path::new("/docs/gone.html"), PlainTextSurface::new, &storage);
        assert_eq!(result.err(), Some(SessionError::NotFound));
        assert!(reg.is_empty());
        assert_eq!(reg.active_id(), None);
    }

    // ========================================================================
    // Activation
    // ========================================================================

    #[test]
    fn test_activate_stale_handle_is_rejected() {
        let storage = MemoryStorage::default();
        let prompts = ScriptedPrompts::default();
        let mut reg = registry();

        let id = reg.create_new_document(PlainTextSurface::new());
        reg.close_active(&storage, &prompts);
        assert!(!reg.activate(id));
        assert_eq!(reg.active_id(), None);
    }

    #[test]
    fn test_next_and_previous_wrap_in_creation_order() {
        let mut reg = registry();
        let a = reg.create_new_document(PlainTextSurface::new());
        let b = reg.create_new_document(PlainTextSurface::new());
        let c = reg.create_new_document(PlainTextSurface::new());

        assert_eq!(reg.activate_next(), Some(a), "wraps past the end");
        assert_eq!(reg.activate_next(), Some(b));
        assert_eq!(reg.activate_previous(), Some(a));
        assert_eq!(reg.activate_previous(), Some(c), "wraps past the start");
    }

    // ========================================================================
    // Closing
    // ========================================================================

    #[test]
    fn test_close_active_retargets_to_last_remaining() {
        let storage = MemoryStorage::default();
        let prompts = ScriptedPrompts::default();
        let mut reg = registry();

        let a = reg.create_new_document(PlainTextSurface::new());
        let b = reg.create_new_document(PlainTextSurface::new());
        reg.create_new_document(PlainTextSurface::new());

        // Close the most recent; focus falls back to the last remaining
        assert!(reg.close_active(&storage, &prompts));
        assert_eq!(reg.active_id(), Some(b));

        reg.activate(a);
        assert!(reg.close_active(&storage, &prompts));
        assert_eq!(reg.active_id(), Some(b));
    }

    #[test]
    fn test_close_active_blocked_by_cancel() {
        let storage = MemoryStorage::default();
        let prompts = ScriptedPrompts::answering(SaveChoice::Cancel);
        let mut reg = registry();

        let id = reg.create_new_document(PlainTextSurface::new());
        reg.active_session_mut().unwrap().note_content_changed();

        assert!(!reg.close_active(&storage, &prompts));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.active_id(), Some(id));
    }

    #[test]
    fn test_close_all_refusal_does_not_block_others() {
        let storage = MemoryStorage::default();
        let prompts = ScriptedPrompts::answering(SaveChoice::Cancel);
        let mut reg = registry();

        reg.create_new_document(PlainTextSurface::new());
        let dirty = reg.create_new_document(PlainTextSurface::new());
        reg.create_new_document(PlainTextSurface::new());
        reg.session_mut(dirty).unwrap().note_content_changed();

        assert!(!reg.close_all(&storage, &prompts));
        assert_eq!(reg.len(), 1, "the two clean sessions are gone");
        assert_eq!(reg.active_id(), Some(dirty));
    }

    #[test]
    fn test_close_all_empty_workspace_succeeds() {
        let storage = MemoryStorage::default();
        let prompts = ScriptedPrompts::default();
        let mut reg = registry();
        assert!(reg.close_all(&storage, &prompts));
    }

    // ========================================================================
    // Window menu
    // ========================================================================

    #[test]
    fn test_window_menu_numbers_in_creation_order() {
        let storage = MemoryStorage::with_file("/docs/a.html", b"x");
        let mut reg = registry();

        let untitled = reg.create_new_document(PlainTextSurface::new());
        let file = reg
            .open_or_focus(Path::new("/docs/a.html"), PlainTextSurface::new, &storage)
            .unwrap();

        let menu = reg.window_menu();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].index, 1);
        assert_eq!(menu[0].name, "Untitled 1");
        assert!(!menu[0].is_active);
        assert_eq!(menu[1].index, 2);
        assert_eq!(menu[1].name, "a.html");
        assert!(menu[1].is_active);
        assert_eq!(menu[1].id, file);

        reg.activate(untitled);
        let menu = reg.window_menu();
        assert!(menu[0].is_active);
        assert!(!menu[1].is_active);
    }

    #[test]
    fn test_window_menu_marks_one_entry_active_among_same_names() {
        let mut reg = registry();
        // Two untitled documents share no name, so force identical names
        // through two files that differ only by directory.
        let storage = MemoryStorage::with_file("/a/doc.html", b"1");
        storage
            .files
            .borrow_mut()
            .insert(PathBuf::from("/b/doc.html"), b"2".to_vec());

        reg.open_or_focus(Path::new("/a/doc.html"), PlainTextSurface::new, &storage)
            .unwrap();
        reg.open_or_focus(Path::new("/b/doc.html"), PlainTextSurface::new, &storage)
            .unwrap();

        let menu = reg.window_menu();
        assert_eq!(menu[0].name, menu[1].name);
        assert_eq!(menu.iter().filter(|e| e.is_active).count(), 1);
        assert!(menu[1].is_active, "identity, not name, decides activity");
    }

    // ========================================================================
    // Command enablement
    // ========================================================================

    #[test]
    fn test_enablement_with_empty_workspace() {
        let reg = registry();
        let map = reg.command_enablement();

        assert_eq!(map.get(&CommandId::SaveDocument), Some(&false));
        assert_eq!(map.get(&CommandId::CloseAllWindows), Some(&false));
        assert_eq!(map.get(&CommandId::Copy), Some(&false));
        assert_eq!(map.get(&CommandId::NewDocument), Some(&true));
        assert_eq!(map.get(&CommandId::OpenDocument), Some(&true));
        assert_eq!(map.get(&CommandId::Quit), Some(&true));
    }

    #[test]
    fn test_enablement_follows_active_selection() {
        let mut reg = registry();
        reg.create_new_document(PlainTextSurface::from_text("hello"));

        let map = reg.command_enablement();
        assert_eq!(map.get(&CommandId::SaveDocument), Some(&true));
        assert_eq!(map.get(&CommandId::Bold), Some(&false));
        assert_eq!(map.get(&CommandId::Cut), Some(&false));

        reg.active_session_mut().unwrap().surface_mut().select(0..5);
        let map = reg.command_enablement();
        assert_eq!(map.get(&CommandId::Bold), Some(&true));
        assert_eq!(map.get(&CommandId::Cut), Some(&true));
        assert_eq!(map.get(&CommandId::AlignJustify), Some(&true));
    }
}
