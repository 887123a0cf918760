//! Named, typed collections of entries that pages read from.
//!
//! A content source is a named collection of entries, loaded once when the build starts and immutable afterwards.
//! Content sources are passed to [`coronate()`](crate::coronate) through the [`content_sources!`](crate::content_sources) macro.
use std::any::Any;

use rustc_hash::FxHashMap;

use crate::errors::ContentError;

/// A single entry of a content source.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry<T> {
    pub id: String,
    pub data: T,
}

impl<T> ContentEntry<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

type EntriesLoader<T> = Box<dyn Fn() -> Vec<ContentEntry<T>> + Send + Sync>;

/// A named collection of entries of type `T`.
///
/// Entries are loaded by calling [`ContentSource::init`], which the build does once for every source before any page is rendered.
///
/// ## Example
/// ```rs
/// use rehber::content::{ContentEntry, ContentSource};
///
/// let mut source = ContentSource::new("guides", Box::new(|| {
///     vec![ContentEntry::new("kasa-kurulum", "Kasa Kurulum Rehberi")]
/// }));
/// source.init()?;
///
/// assert!(source.get_entry_safe("kasa-kurulum").is_some());
/// ```
pub struct ContentSource<T = ()> {
    pub name: String,
    pub entries: Vec<ContentEntry<T>>,
    index: FxHashMap<String, usize>,
    loader: EntriesLoader<T>,
}

impl<T> ContentSource<T> {
    pub fn new(name: impl Into<String>, loader: EntriesLoader<T>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            index: FxHashMap::default(),
            loader,
        }
    }

    /// Returns the entry with the given id, or `None` if there is no such entry.
    pub fn get_entry_safe(&self, id: &str) -> Option<&ContentEntry<T>> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Returns the entry with the given id, or [`ContentError::EntryNotFound`] if there is no such entry.
    pub fn get_entry(&self, id: &str) -> Result<&ContentEntry<T>, ContentError> {
        self.get_entry_safe(id)
            .ok_or_else(|| ContentError::EntryNotFound {
                source_name: self.name.clone(),
                id: id.to_string(),
            })
    }
}

#[doc(hidden)]
/// Type-erased interface of a content source, used by [`ContentSources`].
pub trait ContentSourceInternal: Send + Sync {
    fn init(&mut self) -> Result<(), ContentError>;
    fn get_name(&self) -> &str;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn as_any(&self) -> &dyn Any;
}

impl<T: Send + Sync + 'static> ContentSourceInternal for ContentSource<T> {
    fn init(&mut self) -> Result<(), ContentError> {
        let entries = (self.loader)();
        let mut index = FxHashMap::default();

        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(ContentError::DuplicateEntry {
                    source_name: self.name.clone(),
                    id: entry.id.clone(),
                });
            }
        }

        self.entries = entries;
        self.index = index;

        Ok(())
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// All the content sources of a site.
///
/// Sources are looked up by name and entry type through [`ContentSources::get_source`].
pub struct ContentSources(Vec<Box<dyn ContentSourceInternal>>);

impl ContentSources {
    pub fn new(sources: Vec<Box<dyn ContentSourceInternal>>) -> Self {
        Self(sources)
    }

    pub fn sources_mut(&mut self) -> &mut [Box<dyn ContentSourceInternal>] {
        &mut self.0
    }

    pub fn get_source<T: 'static>(&self, name: &str) -> Result<&ContentSource<T>, ContentError> {
        let source = self
            .0
            .iter()
            .find(|source| source.get_name() == name)
            .ok_or_else(|| ContentError::SourceNotFound {
                name: name.to_string(),
            })?;

        source
            .as_any()
            .downcast_ref::<ContentSource<T>>()
            .ok_or_else(|| ContentError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }
}
