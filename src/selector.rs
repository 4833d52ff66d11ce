//! choosing which files in a family directory to fetch
//!
//! There is no single layout for a family in google/fonts: some ship only
//! static masters, some a single variable font, and some both, with the
//! statics moved to a 'static' subdirectory.

use crate::listing::{is_variable_font, DirectoryEntry};

static STATIC_DIR: &str = "static";

/// The font files in a family directory, grouped the way selection needs them.
///
/// All groups keep the order of the upstream listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidates {
    /// every font file in the family directory
    pub root: Vec<DirectoryEntry>,
    /// the root files that look like variable fonts
    pub variable: Vec<DirectoryEntry>,
    /// the root files that don't
    pub static_root: Vec<DirectoryEntry>,
    /// the 'static' subdirectory, if there is one
    pub static_dir: Option<DirectoryEntry>,
}

/// The outcome of selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Fetch these files
    Files(Vec<DirectoryEntry>),
    /// Fetch the font files listed in this subdirectory
    StaticDir(DirectoryEntry),
}

impl Candidates {
    pub fn from_listing(entries: impl IntoIterator<Item = DirectoryEntry>) -> Self {
        let mut result = Candidates::default();
        for entry in entries {
            if entry.is_dir() && entry.name == STATIC_DIR {
                // a listing can't have two entries with the same name
                result.static_dir = Some(entry);
            } else if entry.is_font_file() {
                if is_variable_font(&entry.name) {
                    result.variable.push(entry.clone());
                } else {
                    result.static_root.push(entry.clone());
                }
                result.root.push(entry);
            }
        }
        result
    }
}

/// Decide which files to fetch.
///
/// The requested flavor wins when it exists; otherwise we fall back to the
/// other flavor, and finally to whatever font files exist at all.
pub fn select(candidates: &Candidates, prefer_variable: bool) -> Selection {
    let Candidates {
        root,
        variable,
        static_root,
        static_dir,
    } = candidates;

    let chosen = |files: &Vec<DirectoryEntry>| Selection::Files(files.clone());

    if prefer_variable {
        if !variable.is_empty() {
            chosen(variable)
        } else if let Some(dir) = static_dir {
            Selection::StaticDir(dir.clone())
        } else if !static_root.is_empty() {
            chosen(static_root)
        } else {
            chosen(root)
        }
    } else if let Some(dir) = static_dir {
        Selection::StaticDir(dir.clone())
    } else if !static_root.is_empty() {
        chosen(static_root)
    } else if !variable.is_empty() {
        chosen(variable)
    } else {
        chosen(root)
    }
}

/// The font files inside a listing of the 'static' subdirectory.
pub fn static_dir_files(entries: impl IntoIterator<Item = DirectoryEntry>) -> Vec<DirectoryEntry> {
    entries
        .into_iter()
        .filter(DirectoryEntry::is_font_file)
        .collect()
}
