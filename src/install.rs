//! downloading resolved families to disk

use std::path::{Path, PathBuf};

use crate::{
    error::Error,
    resolver::{FamilyQuery, FontResolver},
    Fetcher,
};

/// What happened to one requested family.
#[derive(Debug)]
pub struct FamilyOutcome {
    /// The family name as requested
    pub name: String,
    /// The written files, or the reason we gave up
    pub result: Result<Vec<PathBuf>, Error>,
}

/// The outcome of every family requested in a run, in request order.
#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<FamilyOutcome>,
}

impl Report {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// `true` if every family was fetched
    pub fn success(&self) -> bool {
        self.failures() == 0
    }
}

/// Resolve a family and write its files into `dest`, creating it if needed.
///
/// Returns the paths written, in the order the files were resolved.
pub fn fetch_family<F: Fetcher>(
    resolver: &FontResolver<F>,
    query: &FamilyQuery,
    dest: &Path,
) -> Result<Vec<PathBuf>, Error> {
    let files = resolver.resolve(query)?;
    std::fs::create_dir_all(dest).map_err(|source| Error::LocalIo {
        path: dest.to_owned(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        // never let a listing name escape the destination directory
        let Some(local_name) = Path::new(&file.file_name).file_name() else {
            log::warn!("skipping '{}': not a file name", file.file_name);
            continue;
        };
        let target = dest.join(local_name);
        let bytes = resolver
            .fetcher()
            .download(&file.source_url)
            .map_err(|e| Error::upstream(&file.source_url, e))?;
        std::fs::write(&target, bytes).map_err(|source| Error::LocalIo {
            path: target.clone(),
            source,
        })?;
        log::info!("wrote {}", target.display());
        written.push(target);
    }
    Ok(written)
}

/// Fetch each family in turn.
///
/// A failure is recorded and does not stop the remaining families;
/// `on_outcome` is called as each family finishes.
pub fn fetch_families<F: Fetcher>(
    resolver: &FontResolver<F>,
    names: &[String],
    prefer_variable: bool,
    dest: &Path,
    mut on_outcome: impl FnMut(&FamilyOutcome),
) -> Report {
    let mut report = Report::default();
    for name in names {
        let query = FamilyQuery::new(name.as_str(), prefer_variable);
        let result = fetch_family(resolver, &query, dest);
        if let Err(e) = &result {
            log::debug!("fetching '{name}' failed: {e:?}");
        }
        let outcome = FamilyOutcome {
            name: name.clone(),
            result,
        };
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }
    report
}

/// Split the positional arguments into family names.
///
/// Arguments are joined with spaces and split on commas, so both
/// `nunito, open sans` and `nunito open-sans` work as expected.
pub fn parse_font_list(args: &[String]) -> Vec<String> {
    args.join(" ")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
