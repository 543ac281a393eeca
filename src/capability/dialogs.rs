//! Native dialog prompts (using rfd)

use std::path::{Path, PathBuf};

use super::{InteractivePrompts, SaveChoice};

/// Prompts backed by the platform's native dialogs
#[derive(Debug, Clone, Default)]
pub struct NativeDialogs {
    /// Directory the open dialog starts in when the suggested path has no
    /// parent (typically the configured default save directory)
    pub start_dir: Option<PathBuf>,
}

impl NativeDialogs {
    pub fn new(start_dir: Option<PathBuf>) -> Self {
        Self { start_dir }
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        rfd::FileDialog::new().add_filter("HTML documents", &["htm", "html"])
    }
}

impl InteractivePrompts for NativeDialogs {
    fn choose_save_target(&self, suggested: &Path) -> Option<PathBuf> {
        let mut dlg = self.file_dialog().set_title("Save As");
        if let Some(dir) = suggested.parent().filter(|d| !d.as_os_str().is_empty()) {
            dlg = dlg.set_directory(dir);
        } else if let Some(ref dir) = self.start_dir {
            dlg = dlg.set_directory(dir);
        }
        if let Some(name) = suggested.file_name() {
            dlg = dlg.set_file_name(name.to_string_lossy());
        }

        dlg.save_file()
    }

    fn choose_open_target(&self) -> Option<PathBuf> {
        let mut dlg = self.file_dialog().set_title("Open");
        if let Some(ref dir) = self.start_dir {
            dlg = dlg.set_directory(dir);
        }

        dlg.pick_file()
    }

    fn confirm_save_discard_cancel(&self, doc_name: &str) -> SaveChoice {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Save changes?")
            .set_description(format!(
                "\"{}\" has been modified.\nDo you want to save your changes?",
                doc_name
            ))
            .set_buttons(rfd::MessageButtons::YesNoCancel)
            .show();

        match result {
            rfd::MessageDialogResult::Yes => SaveChoice::Save,
            rfd::MessageDialogResult::No => SaveChoice::Discard,
            _ => SaveChoice::Cancel,
        }
    }
}
