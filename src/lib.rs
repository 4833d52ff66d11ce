//! Fetching font families from the Google Fonts repository
//!
//! Families are looked up by name in the [google/fonts] github repo, using
//! the github contents API. The repo has no single layout for a family, so
//! we pick the files to fetch based on what the family directory contains
//! and whether the caller wants variable or static fonts.
//!
//! [google/fonts]: https://github.com/google/fonts

use std::{
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use kdam::BarExt;

mod args;
mod config;
mod error;
mod fetch;
mod install;
mod listing;
mod resolver;
mod selector;

pub use args::{Args, Command};
pub use config::{default_font_dir, Config, DEFAULT_API_BASE, DEFAULT_LICENSE_DIRS};
pub use error::{Error, FetchError};
pub use fetch::{Fetcher, HttpFetcher};
pub use install::{fetch_families, fetch_family, parse_font_list, FamilyOutcome, Report};
pub use listing::{is_font_file, is_variable_font, normalize_family, DirectoryEntry, EntryKind};
pub use resolver::{FamilyQuery, FontFile, FontResolver, Probe};
pub use selector::{select, Candidates, Selection};

use error::UnwrapOrDie;

/// entry point for the cli tool
pub fn run(args: &Args) -> ExitCode {
    let (fonts, prefer_static, dest, verb) = match &args.command {
        Command::Install {
            fonts,
            prefer_static,
        } => {
            let dest = default_font_dir()
                .ok_or("no font directory is known for this platform")
                .unwrap_or_die(|e| eprintln!("failed to install: {e}"));
            (fonts, *prefer_static, dest, Verb::Install)
        }
        Command::Download {
            fonts,
            output,
            prefer_static,
        } => {
            let dest = match output {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()
                    .unwrap_or_die(|e| eprintln!("failed to read current directory: '{e}'")),
            };
            (fonts, *prefer_static, dest, Verb::Download)
        }
    };

    let fonts = parse_font_list(fonts);
    if fonts.is_empty() {
        eprintln!("No fonts provided.");
        return ExitCode::FAILURE;
    }

    let config = Config::from_env();
    let resolver = FontResolver::new(HttpFetcher::new(&config), &config);
    let report = fetch_with_progress(&resolver, &fonts, !prefer_static, &dest, verb);

    if verb == Verb::Install && cfg!(target_os = "linux") && report.failures() < fonts.len() {
        println!("If fonts are not visible, run: fc-cache -f");
    }

    if report.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Install,
    Download,
}

impl Verb {
    fn present(self) -> &'static str {
        match self {
            Verb::Install => "install",
            Verb::Download => "download",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Verb::Install => "Installed",
            Verb::Download => "Downloaded",
        }
    }
}

fn outcome_message(outcome: &FamilyOutcome, verb: Verb, dest: &Path) -> String {
    match &outcome.result {
        Ok(files) => format!(
            "{} {} ({} files) to {}",
            verb.past(),
            outcome.name,
            files.len(),
            dest.display()
        ),
        Err(e) => format!("Failed to {} {}: {e}", verb.present(), outcome.name),
    }
}

/// Print the line for a finished family: successes to `out`, failures to `err`.
fn report_outcome(
    outcome: &FamilyOutcome,
    verb: Verb,
    dest: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    let msg = outcome_message(outcome, verb, dest);
    match outcome.result {
        Ok(_) => writeln!(out, "{msg}"),
        Err(_) => writeln!(err, "{msg}"),
    }
}

// a progress bar only makes sense with more than one family
fn fetch_with_progress<F: Fetcher>(
    resolver: &FontResolver<F>,
    fonts: &[String],
    prefer_variable: bool,
    dest: &Path,
    verb: Verb,
) -> Report {
    let mut progressbar = (fonts.len() > 1).then(|| {
        kdam::tqdm!(
            total = fonts.len(),
            desc = verb.present(),
            leave = false
        )
    });

    fetch_families(resolver, fonts, prefer_variable, dest, |outcome| {
        let report = || report_outcome(outcome, verb, dest, &mut io::stdout(), &mut io::stderr());
        // the bar draws on stderr; clear it so our line isn't drawn over it
        let result = match progressbar.as_mut() {
            Some(bar) => bar
                .clear()
                .and_then(|_| report())
                .and_then(|_| bar.update(1).map(drop)),
            None => report(),
        };
        if let Err(e) = result {
            log::warn!("failed to report '{}': '{e}'", outcome.name);
        }
    })
}
