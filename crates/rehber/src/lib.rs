//! Static page generation for the Mizan setup guides.
//!
//! A site is a list of routes (see [`route`]) and its content sources (see [`content`]).
//! [`coronate()`] loads the content, renders every page and writes the result to disk.

// `#[route]` expands to `rehber::...` paths, which must also resolve inside this crate.
extern crate self as rehber;

pub mod content;
pub mod errors;
pub mod route;

mod build;
mod logging;
mod templating;

pub use build::metadata::{BuildOutput, PageOutput, StaticAssetOutput};
pub use build::options::BuildOptions;

#[cfg(feature = "maud")]
pub mod maud {
    //! Helpers for rendering pages with [Maud](https://maud.lambda.xyz).
    //!
    //! `maud::Markup` converts into a [`RenderResult`](crate::route::RenderResult), so `render` can return `html! { ... }` directly.
    pub use crate::templating::maud_ext::*;
}

use content::ContentSources;
use route::FullRoute;

/// Borrows a list of route values as the slice [`coronate()`] takes.
///
/// ```rs
/// coronate(routes![Index, Guide, NotFound], content_sources(), BuildOptions::default())
/// ```
#[macro_export]
macro_rules! routes {
    [$($route:expr),*] => {
        &[$(&$route),*]
    };
}

/// Declares content sources by name, each backed by a closure returning its entries.
///
/// ```rs
/// content_sources![
///     "guides" => vec![ContentEntry::new("kasa-kurulum", "Kasa Kurulum Rehberi")]
/// ]
/// ```
#[macro_export]
macro_rules! content_sources {
    ($($name:expr => $entries:expr),*) => {
        $crate::content::ContentSources::new(vec![$(
            Box::new($crate::content::ContentSource::new($name, Box::new(move || $entries)))
                as Box<dyn $crate::content::ContentSourceInternal>
        ),*])
    };
}

/// Name and version of this library, for `<meta name="generator">`.
pub const GENERATOR: &str = concat!("Rehber v", env!("CARGO_PKG_VERSION"));

/// Builds the site into `options.output_dir`.
///
/// Fails on the first content, render or write error; nothing is retried.
pub fn coronate(
    routes: &[&dyn FullRoute],
    mut content_sources: ContentSources,
    options: BuildOptions,
) -> Result<BuildOutput, Box<dyn std::error::Error>> {
    logging::init_logging();

    build::execute_build(routes, &mut content_sources, &options)
}
