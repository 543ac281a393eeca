//! Command identities for menus and toolbars
//!
//! The registry computes enablement per `CommandId`; executing a command is
//! the embedder's concern. Grouping constants drive enablement: commands
//! needing an open document, commands needing a selection, and commands
//! that are always available.

// ============================================================================
// Command Registry
// ============================================================================

/// Identifies a menu or toolbar command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // File operations
    NewDocument,
    OpenDocument,
    SaveDocument,
    SaveDocumentAs,
    PrintDocument,
    PrintPreview,

    // Edit operations
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,

    // Formatting
    Bold,
    Italic,
    Underline,
    AlignLeft,
    AlignCenter,
    AlignRight,
    AlignJustify,
    TextColor,
    ListStyle,

    // Window management
    CloseWindow,
    CloseAllWindows,
    TileWindows,
    CascadeWindows,
    NextWindow,
    PreviousWindow,

    // Application
    Quit,
}

/// Commands enabled whenever any document is open
pub const SESSION_COMMANDS: &[CommandId] = &[
    CommandId::SaveDocument,
    CommandId::SaveDocumentAs,
    CommandId::PrintDocument,
    CommandId::PrintPreview,
    CommandId::Undo,
    CommandId::Redo,
    CommandId::Paste,
    CommandId::CloseWindow,
    CommandId::CloseAllWindows,
    CommandId::TileWindows,
    CommandId::CascadeWindows,
    CommandId::NextWindow,
    CommandId::PreviousWindow,
];

/// Commands enabled only when the active document has a selection
pub const SELECTION_COMMANDS: &[CommandId] = &[
    CommandId::Cut,
    CommandId::Copy,
    CommandId::Bold,
    CommandId::Italic,
    CommandId::Underline,
    CommandId::AlignLeft,
    CommandId::AlignCenter,
    CommandId::AlignRight,
    CommandId::AlignJustify,
    CommandId::TextColor,
    CommandId::ListStyle,
];

/// Commands that are always enabled
pub const ALWAYS_COMMANDS: &[CommandId] = &[
    CommandId::NewDocument,
    CommandId::OpenDocument,
    CommandId::Quit,
];

/// A command definition for menu construction
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::NewDocument,
        label: "New",
        keybinding: Some("Ctrl+N"),
    },
    CommandDef {
        id: CommandId::OpenDocument,
        label: "Open...",
        keybinding: Some("Ctrl+O"),
    },
    CommandDef {
        id: CommandId::SaveDocument,
        label: "Save",
        keybinding: Some("Ctrl+S"),
    },
    CommandDef {
        id: CommandId::SaveDocumentAs,
        label: "Save As...",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::PrintDocument,
        label: "Print...",
        keybinding: Some("Ctrl+P"),
    },
    CommandDef {
        id: CommandId::PrintPreview,
        label: "Print Preview...",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::Undo,
        label: "Undo",
        keybinding: Some("Ctrl+Z"),
    },
    CommandDef {
        id: CommandId::Redo,
        label: "Redo",
        keybinding: Some("Ctrl+Y"),
    },
    CommandDef {
        id: CommandId::Cut,
        label: "Cut",
        keybinding: Some("Ctrl+X"),
    },
    CommandDef {
        id: CommandId::Copy,
        label: "Copy",
        keybinding: Some("Ctrl+C"),
    },
    CommandDef {
        id: CommandId::Paste,
        label: "Paste",
        keybinding: Some("Ctrl+V"),
    },
    CommandDef {
        id: CommandId::Bold,
        label: "Bold",
        keybinding: Some("Ctrl+B"),
    },
    CommandDef {
        id: CommandId::Italic,
        label: "Italic",
        keybinding: Some("Ctrl+I"),
    },
    CommandDef {
        id: CommandId::Underline,
        label: "Underline",
        keybinding: Some("Ctrl+U"),
    },
    CommandDef {
        id: CommandId::AlignLeft,
        label: "Align Left",
        keybinding: Some("Ctrl+L"),
    },
    CommandDef {
        id: CommandId::AlignCenter,
        label: "Center",
        keybinding: Some("Ctrl+E"),
    },
    CommandDef {
        id: CommandId::AlignRight,
        label: "Align Right",
        keybinding: Some("Ctrl+R"),
    },
    CommandDef {
        id: CommandId::AlignJustify,
        label: "Justify",
        keybinding: Some("Ctrl+J"),
    },
    CommandDef {
        id: CommandId::TextColor,
        label: "Color...",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::ListStyle,
        label: "List Style",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::CloseWindow,
        label: "Close",
        keybinding: Some("Ctrl+W"),
    },
    CommandDef {
        id: CommandId::CloseAllWindows,
        label: "Close All",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::TileWindows,
        label: "Tile",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::CascadeWindows,
        label: "Cascade",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::NextWindow,
        label: "Next Window",
        keybinding: Some("Ctrl+Tab"),
    },
    CommandDef {
        id: CommandId::PreviousWindow,
        label: "Previous Window",
        keybinding: Some("Ctrl+Shift+Tab"),
    },
    CommandDef {
        id: CommandId::Quit,
        label: "Exit",
        keybinding: Some("Ctrl+Q"),
    },
];

/// Look up the definition for a command
pub fn command_def(id: CommandId) -> Option<&'static CommandDef> {
    COMMANDS.iter().find(|def| def.id == id)
}
