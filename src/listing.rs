//! records returned by the github contents API, and the naming conventions
//! used in the google/fonts repo

/// The kind of a directory listing record
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// symlinks and submodules; we never select these
    #[serde(other)]
    Other,
}

/// One record of a directory listing.
///
/// See <https://docs.github.com/en/rest/repos/contents#get-repository-content>
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Raw download location; absent for directories
    #[serde(default)]
    pub download_url: Option<String>,
    /// The API url for this entry, used to list subdirectories
    #[serde(default)]
    pub url: Option<String>,
}

impl DirectoryEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// `true` if this is a file with a font extension
    pub fn is_font_file(&self) -> bool {
        self.is_file() && is_font_file(&self.name)
    }

    /// Just for testing
    #[cfg(test)]
    pub(crate) fn file(name: &str, download_url: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            download_url: download_url.map(Into::into),
            url: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn dir(name: &str, url: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            download_url: None,
            url: url.map(Into::into),
        }
    }
}

/// Parse a directory listing from a json value.
pub(crate) fn parse_listing(
    json: serde_json::Value,
) -> Result<Vec<DirectoryEntry>, serde_json::Error> {
    serde_json::from_value(json)
}

/// Normalize a family name to the name of its directory in google/fonts.
///
/// "Open Sans", "open-sans" and "OPENSANS" all become "opensans".
pub fn normalize_family(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// `true` for '.ttf' and '.otf' files, ignoring case.
pub fn is_font_file(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf")
}

/// Guess whether a file name belongs to a variable font.
///
/// google/fonts names variable fonts like 'Inter[opsz,wght].ttf'; older
/// uploads use 'VariableFont' or a 'VF' token instead. The 'VF' check is
/// a heuristic and will also match any name with a standalone 'vf' part.
pub fn is_variable_font(name: &str) -> bool {
    has_axis_tags(name)
        || contains_ignore_case(name, "variablefont")
        || name
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|token| token.eq_ignore_ascii_case("vf"))
}

// some '[' followed (eventually) by some ']' with something in between
fn has_axis_tags(name: &str) -> bool {
    match (name.find('['), name.rfind(']')) {
        (Some(open), Some(close)) => close > open + 1,
        _ => false,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}
