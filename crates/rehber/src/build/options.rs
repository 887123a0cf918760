use std::path::PathBuf;

/// Settings for [`coronate()`](crate::coronate).
///
/// ```rs
/// BuildOptions {
///     base_url: Some("https://rehber.example.com".into()),
///     ..Default::default()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Origin the site is served from. Pages use it for canonical links; without it they have none.
    pub base_url: Option<String>,
    /// Default: `dist`
    pub output_dir: PathBuf,
    /// Copied as-is into `output_dir`. Default: `static`
    pub static_dir: PathBuf,
    /// Empty `output_dir` before writing. Default: `true`
    pub clean_output_dir: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            output_dir: PathBuf::from("dist"),
            static_dir: PathBuf::from("static"),
            clean_output_dir: true,
        }
    }
}
