//! Content formats and formatting values
//!
//! The shell does not interpret rich text itself; these types describe
//! what the rich-text surface should do. `sniff_format` implements the
//! plain-text vs markup auto-detection used when loading a document, and
//! `ensure_document_extension` the save-path normalization.

use std::path::PathBuf;

/// Extensions recognized as already-normalized document paths
pub const DOCUMENT_EXTENSIONS: &[&str] = &["htm", "html"];

/// Extension appended to save targets that lack a recognized one
pub const DEFAULT_EXTENSION: &str = "html";

/// How loaded bytes should be interpreted by the rich-text surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    PlainText,
    Markup,
}

/// Guess whether content is markup or plain text.
///
/// Looks for a leading tag (`<html>`, `<!DOCTYPE ...>`, `</p>`, ...) within
/// the first 256 bytes, after skipping leading whitespace. Anything else is
/// treated as plain text.
pub fn sniff_format(bytes: &[u8]) -> ContentFormat {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    let trimmed = head.trim_start();
    if let Some(rest) = trimmed.strip_prefix('<') {
        let rest = rest
            .strip_prefix('!')
            .or_else(|| rest.strip_prefix('/'))
            .unwrap_or(rest);
        let tag_len = rest.chars().take_while(|c| c.is_ascii_alphanumeric()).count();
        if tag_len > 0 && rest[tag_len..].contains('>') {
            return ContentFormat::Markup;
        }
    }
    ContentFormat::PlainText
}

/// Append the default extension unless the path already carries a
/// recognized document extension (case-insensitive). Applied at most once:
/// saving "x" yields "x.html"; saving "x.html" again leaves it alone.
pub fn ensure_document_extension(path: PathBuf) -> PathBuf {
    let recognized = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| DOCUMENT_EXTENSIONS.iter().any(|d| e.eq_ignore_ascii_case(d)))
        .unwrap_or(false);

    if recognized {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(".");
        raw.push(DEFAULT_EXTENSION);
        PathBuf::from(raw)
    }
}

// ============================================================================
// Formatting values
// ============================================================================

/// Foreground color for character formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Character format with merge semantics: only the `Some` fields are
/// applied to the selection, the rest of the formatting is left in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterFormat {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub family: Option<String>,
    pub point_size: Option<f32>,
    pub foreground: Option<Rgb>,
}

impl CharacterFormat {
    pub fn bold(on: bool) -> Self {
        Self { bold: Some(on), ..Self::default() }
    }

    pub fn italic(on: bool) -> Self {
        Self { italic: Some(on), ..Self::default() }
    }

    pub fn underline(on: bool) -> Self {
        Self { underline: Some(on), ..Self::default() }
    }

    pub fn family(name: impl Into<String>) -> Self {
        Self { family: Some(name.into()), ..Self::default() }
    }

    /// Point size, ignored unless positive (a size combo box can hand over
    /// arbitrary user input)
    pub fn point_size(size: f32) -> Option<Self> {
        if size > 0.0 {
            Some(Self { point_size: Some(size), ..Self::default() })
        } else {
            None
        }
    }

    pub fn foreground(color: Rgb) -> Self {
        Self { foreground: Some(color), ..Self::default() }
    }
}

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
    Justify,
}

/// List style for the current paragraph. `None` passed to
/// `set_list_style` resets the paragraph to default formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Disc,
    Circle,
    Square,
    Decimal,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}
