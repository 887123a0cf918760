use std::path::PathBuf;
use std::process::{ExitCode, Termination};
use std::time::Instant;

use crate::errors::UrlError;

/// A page written by the build.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutput {
    /// Pattern of the route that produced the page, e.g. `/rehber/[guide]`.
    pub route: String,
    pub url: String,
    pub file_path: PathBuf,
    /// Parameter value the page was generated for, on parameter routes.
    pub param: Option<String>,
}

/// A file copied from the static directory.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticAssetOutput {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// What [`coronate()`](crate::coronate) produced.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
    pub static_files: Vec<StaticAssetOutput>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
            static_files: Vec::new(),
        }
    }

    /// The page a static host would serve for `path`.
    ///
    /// `/rehber/kasa-kurulum` and `/rehber/kasa-kurulum/` are the same page.
    /// Paths with no generated page give [`UrlError::RouteNotFound`]; hosts answer those with `404.html`.
    pub fn resolve(&self, path: &str) -> Result<&PageOutput, UrlError> {
        let wanted = path.trim_matches('/');

        self.pages
            .iter()
            .find(|page| page.url.trim_matches('/') == wanted)
            .ok_or_else(|| UrlError::RouteNotFound {
                path: path.to_string(),
            })
    }
}

impl Termination for BuildOutput {
    fn report(self) -> ExitCode {
        ExitCode::SUCCESS
    }
}
