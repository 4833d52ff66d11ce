//! resolving a family name to the files we should download

use crate::{
    error::Error,
    listing::{normalize_family, parse_listing, DirectoryEntry},
    selector::{select, static_dir_files, Candidates, Selection},
    Config, Fetcher,
};

/// A request for one font family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilyQuery {
    /// The family name as the user typed it, e.g. "Open Sans"
    pub name: String,
    /// Whether to prefer variable fonts over static instances
    pub prefer_variable: bool,
}

impl FamilyQuery {
    pub fn new(name: impl Into<String>, prefer_variable: bool) -> Self {
        Self {
            name: name.into(),
            prefer_variable,
        }
    }
}

/// A file selected for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFile {
    pub file_name: String,
    pub source_url: String,
}

/// The result of checking whether a family exists under a license directory.
#[derive(Debug)]
pub enum Probe {
    Found(String),
    NotFound,
    Failed(Error),
}

/// Finds the files for a family in the google/fonts repo.
pub struct FontResolver<F> {
    fetcher: F,
    config: Config,
}

impl<F: Fetcher> FontResolver<F> {
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            fetcher,
            config: config.clone(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Return the files to download for this family, in listing order.
    ///
    /// The result can be empty, if the family directory has no usable font
    /// files.
    pub fn resolve(&self, query: &FamilyQuery) -> Result<Vec<FontFile>, Error> {
        let family_url = self.find_family_dir(&query.name)?;
        let entries = self.list(&family_url)?;
        let candidates = Candidates::from_listing(entries);

        let chosen = match select(&candidates, query.prefer_variable) {
            Selection::Files(files) => files,
            Selection::StaticDir(dir) => {
                let url = dir
                    .url
                    .unwrap_or_else(|| format!("{family_url}/{}", dir.name));
                static_dir_files(self.list(&url)?)
            }
        };

        let files = chosen
            .into_iter()
            .filter_map(|entry| match entry.download_url {
                Some(source_url) => Some(FontFile {
                    file_name: entry.name,
                    source_url,
                }),
                None => {
                    log::warn!("no download url for '{}', skipping", entry.name);
                    None
                }
            })
            .collect::<Vec<_>>();
        log::info!(
            "resolved '{}' to {} files at {family_url}",
            query.name,
            files.len()
        );
        Ok(files)
    }

    /// Find the listing url for a family, checking each license directory in turn.
    fn find_family_dir(&self, name: &str) -> Result<String, Error> {
        let normalized = normalize_family(name);
        // an empty name would probe the license directory itself
        if normalized.is_empty() {
            return Err(Error::NotFound(name.to_owned()));
        }
        for license in &self.config.license_dirs {
            let url = self.config.family_url(license, &normalized);
            match self.probe(url) {
                Probe::Found(url) => return Ok(url),
                Probe::NotFound => log::debug!("'{normalized}' not in {license}"),
                Probe::Failed(e) => return Err(e),
            }
        }
        Err(Error::NotFound(name.to_owned()))
    }

    pub fn probe(&self, url: String) -> Probe {
        match self.fetcher.fetch_json(&url) {
            Ok(_) => Probe::Found(url),
            Err(e) if e.is_not_found() => Probe::NotFound,
            Err(e) => Probe::Failed(Error::upstream(url, e)),
        }
    }

    fn list(&self, url: &str) -> Result<Vec<DirectoryEntry>, Error> {
        let json = self
            .fetcher
            .fetch_json(url)
            .map_err(|e| Error::upstream(url, e))?;
        parse_listing(json).map_err(|e| Error::upstream(url, e))
    }
}
