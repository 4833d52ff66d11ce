//! process-wide configuration

use std::path::PathBuf;

/// The contents API for the google/fonts github repository
pub static DEFAULT_API_BASE: &str = "https://api.github.com/repos/google/fonts/contents";
/// Top level license directories in google/fonts, in the order we probe them
pub static DEFAULT_LICENSE_DIRS: &[&str] = &["ofl", "apache", "ufl"];
static USER_AGENT: &str = "fifi";

/// Token variables in priority order; the first one that is set and not
/// blank wins, so an empty `FIFI_GITHUB_TOKEN` falls through to `GITHUB_TOKEN`.
static TOKEN_VARS: &[&str] = &["FIFI_GITHUB_TOKEN", "GITHUB_TOKEN"];
static API_BASE_VAR: &str = "FIFI_API_BASE";

/// Read-only settings shared by every family resolution in a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the directory listing API, without a trailing '/'
    pub api_base: String,
    /// License directories probed for a family, in order
    pub license_dirs: Vec<String>,
    /// Optional access token, attached to every request when present
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            license_dirs: DEFAULT_LICENSE_DIRS.iter().map(|s| s.to_string()).collect(),
            token: None,
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl Config {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config, using `lookup` to read environment variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());
        let token = TOKEN_VARS.iter().find_map(|key| non_empty(*key));
        if token.is_none() {
            log::debug!("no github token in environment, requests are unauthenticated");
        }
        let mut config = Config {
            token,
            ..Default::default()
        };
        if let Some(base) = non_empty(API_BASE_VAR) {
            config.api_base = base.trim_end_matches('/').to_owned();
        }
        config
    }

    /// The listing URL for `family` under the license directory `license`.
    pub(crate) fn family_url(&self, license: &str, family: &str) -> String {
        format!("{}/{license}/{family}", self.api_base)
    }
}

/// The directory fonts are installed to for the current user, if known.
pub fn default_font_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        // dirs has no font dir on windows
        dirs::data_local_dir().map(|dir| dir.join("Microsoft").join("Windows").join("Fonts"))
    } else {
        dirs::font_dir()
    }
}
