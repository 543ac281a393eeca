//! inkpad - multi-document word-processor shell core
//!
//! The document-session state machine and workspace registry of an MDI
//! word processor, without the GUI: session identity and dirty tracking,
//! load/save/save-as/close-confirmation transitions, open-or-focus
//! deduplication, window-menu generation, and command enablement. Text
//! rendering, printing, and dialogs are reached through capability traits,
//! so embedders plug in their own surface and dialog implementations (or
//! the bundled [`DiskStorage`], [`NativeDialogs`], and
//! [`PlainTextSurface`]).

pub mod capability;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod format;
pub mod model;
pub mod recent_files;
pub mod surface;
pub mod tracing;

pub use capability::{
    DiskStorage, InteractivePrompts, NativeDialogs, RichTextSurface, SaveChoice, StorageCapability,
};
pub use commands::{CommandDef, CommandId, COMMANDS};
pub use config::AppConfig;
pub use error::SessionError;
pub use format::{
    ensure_document_extension, sniff_format, Alignment, CharacterFormat, ContentFormat, ListStyle,
    Rgb,
};
pub use model::{
    DocumentPath, DocumentSession, SaveOutcome, SessionId, WindowMenuEntry, WorkspaceRegistry,
};
pub use recent_files::RecentFiles;
pub use surface::PlainTextSurface;
