//! Routes and the context they render with.
//!
//! A route is a struct implementing [`Route`] and marked with `#[route("...")]`, which checks its pattern and implements [`FullRoute`] for the build.
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::content::ContentSources;

/// Output of [`Route::render`]: the page HTML, or the reason it could not be produced.
#[derive(Debug)]
pub enum RenderResult {
    Text(String),
    Err(Box<dyn Error>),
}

impl From<String> for RenderResult {
    fn from(html: String) -> Self {
        RenderResult::Text(html)
    }
}

impl From<&str> for RenderResult {
    fn from(html: &str) -> Self {
        RenderResult::Text(html.to_owned())
    }
}

impl<T, E> From<Result<T, E>> for RenderResult
where
    T: Into<RenderResult>,
    E: Into<Box<dyn Error>>,
{
    fn from(result: Result<T, E>) -> Self {
        result.map_or_else(|err| RenderResult::Err(err.into()), Into::into)
    }
}

/// Where a route lives, as written in `#[route("...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    /// A directory-style page: `/rehber` is written to `rehber/index.html` and linked as `/rehber/`.
    Page(&'static str),
    /// A file written as-is, such as `/404.html`.
    File(&'static str),
    /// One page per value of a trailing parameter: `/rehber/[guide]`.
    Param {
        prefix: &'static str,
        name: &'static str,
    },
}

impl RoutePattern {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, RoutePattern::Param { .. })
    }

    /// The pattern as it was declared.
    pub fn raw(&self) -> String {
        match self {
            RoutePattern::Page(path) | RoutePattern::File(path) => path.to_string(),
            RoutePattern::Param { prefix, name } => format!("{prefix}[{name}]"),
        }
    }

    /// URL of a page of this route.
    ///
    /// `value` fills the parameter of a [`RoutePattern::Param`] route and is ignored otherwise.
    /// Without a value, a parameter route links to its prefix.
    pub fn url(&self, value: Option<&str>) -> String {
        match (self, value) {
            (RoutePattern::File(path), _) => path.to_string(),
            (RoutePattern::Page(path), _) => with_trailing_slash(path),
            (RoutePattern::Param { prefix, .. }, Some(value)) => format!("{prefix}{value}/"),
            (RoutePattern::Param { prefix, .. }, None) => prefix.to_string(),
        }
    }

    /// File the page is written to, inside `output_dir`.
    pub fn file_path(&self, value: Option<&str>, output_dir: &Path) -> PathBuf {
        let url = self.url(value);
        let mut path = output_dir.to_path_buf();
        path.extend(url.split('/').filter(|segment| !segment.is_empty()));

        if !matches!(self, RoutePattern::File(_)) {
            path.push("index.html");
        }

        path
    }
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// What a page can see while rendering.
pub struct PageContext<'a> {
    pub content: &'a ContentSources,
    /// URL of the page being rendered, e.g. `/rehber/inpos-kurulum/`.
    pub url: &'a str,
    /// See [`BuildOptions::base_url`](crate::BuildOptions::base_url).
    pub base_url: Option<&'a str>,
    param: Option<&'a str>,
}

impl<'a> PageContext<'a> {
    pub fn new(
        content: &'a ContentSources,
        url: &'a str,
        base_url: Option<&'a str>,
        param: Option<&'a str>,
    ) -> Self {
        Self {
            content,
            url,
            base_url,
            param,
        }
    }

    /// Value of the route parameter for this page. `None` on routes without one.
    pub fn param(&self) -> Option<&'a str> {
        self.param
    }

    /// Absolute URL of the page, when a base URL is configured.
    pub fn canonical_url(&self) -> Option<String> {
        self.base_url
            .map(|base| format!("{}{}", base.trim_end_matches('/'), self.url))
    }
}

/// Passed to [`Route::pages`].
pub struct DynamicRouteContext<'a> {
    pub content: &'a ContentSources,
}

/// A page, or family of pages, of the site.
///
/// ## Example
/// ```rs
/// use rehber::route::prelude::*;
///
/// #[route("/rehber/[guide]")]
/// pub struct Guide;
///
/// impl Route for Guide {
///     fn pages(&self, _ctx: &DynamicRouteContext) -> Vec<String> {
///         vec!["kasa-kurulum".to_string()]
///     }
///
///     fn render(&self, ctx: &PageContext) -> impl Into<RenderResult> {
///         format!("<h1>{}</h1>", ctx.param().unwrap_or_default())
///     }
/// }
/// ```
pub trait Route {
    /// Parameter values to generate pages for. Only called on routes with a `[param]` segment.
    fn pages(&self, _ctx: &DynamicRouteContext) -> Vec<String> {
        Vec::new()
    }

    fn render(&self, ctx: &PageContext) -> impl Into<RenderResult>;
}

/// Object-safe side of a route, implemented by `#[route]`.
pub trait FullRoute: Sync + Send {
    fn pattern(&self) -> RoutePattern;

    #[doc(hidden)]
    fn pages_internal(&self, ctx: &DynamicRouteContext) -> Vec<String>;

    #[doc(hidden)]
    fn render_internal(&self, ctx: &PageContext) -> RenderResult;

    /// URL of this route's page. Parameter routes link to their prefix.
    fn url(&self) -> String {
        self.pattern().url(None)
    }

    /// URL of the page generated for `value`.
    fn page_url(&self, value: &str) -> String {
        self.pattern().url(Some(value))
    }
}

pub mod prelude {
    //! Everything a routes file needs: `use rehber::route::prelude::*;`
    pub use super::{DynamicRouteContext, FullRoute, PageContext, RenderResult, Route};
    pub use rehber_macros::route;
}
