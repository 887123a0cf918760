//! Error types for rehber.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed through Debug, thiserror only gives us Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum UrlError {
    #[error("No page was generated for `{path}`")]
    RouteNotFound { path: String },
}

#[derive(Error)]
pub enum ContentError {
    #[error("Entry `{id}` not found in content source `{source_name}`")]
    EntryNotFound { source_name: String, id: String },

    #[error(
        "Content source `{name}` does not exist. Make sure it is declared in `content_sources!` and passed to `coronate()`."
    )]
    SourceNotFound { name: String },

    #[error("Content source `{name}` does not contain entries of type `{expected}`")]
    TypeMismatch { name: String, expected: &'static str },

    #[error("Content source `{source_name}` contains more than one entry with id `{id}`")]
    DuplicateEntry { source_name: String, id: String },
}

#[derive(Error)]
pub enum BuildError {
    #[error("Failed to render `{url}` (route `{route}`): {message}")]
    RenderFailed {
        route: String,
        url: String,
        message: String,
    },

    #[error("Route `{route}` returned `{value}` as a page, which is not a single path segment")]
    InvalidParam { route: String, value: String },

    #[error("Failed to write page to {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl_debug_for_error!(UrlError, ContentError, BuildError);
