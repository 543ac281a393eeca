//! Core state: document sessions and the workspace registry

pub mod session;
pub mod workspace;

pub use session::{DocumentPath, DocumentSession, SaveOutcome};
pub use workspace::{SessionId, WindowMenuEntry, WorkspaceRegistry};
