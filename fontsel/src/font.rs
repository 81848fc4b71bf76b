// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for a resolved font.

use core::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// A concrete font choice: a file on disk plus the index of the face within
/// it.
///
/// This is the unit of resolution returned to callers and the unit keyed in
/// the override table. Equality and hashing consider only the file path and
/// collection index; the optional display name is carried for UI purposes and
/// never participates in identity.
#[derive(Clone, Debug)]
pub struct FontCompat {
    file: PathBuf,
    collection_index: u32,
    name: Option<String>,
}

impl FontCompat {
    /// Creates a new font handle for the given path and collection index.
    pub fn new(file: impl Into<PathBuf>, collection_index: u32) -> Self {
        Self {
            file: file.into(),
            collection_index,
            name: None,
        }
    }

    /// Creates a new font handle with a display name attached.
    pub fn with_name(
        file: impl Into<PathBuf>,
        collection_index: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            collection_index,
            name: Some(name.into()),
        }
    }

    /// Returns the path of the font file.
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Returns the index of the face within the font file.
    ///
    /// This is `0` unless the file is a collection.
    pub fn collection_index(&self) -> u32 {
        self.collection_index
    }

    /// Returns the display name, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the font file currently exists on disk.
    pub fn exists(&self) -> bool {
        self.file.is_file()
    }
}

impl PartialEq for FontCompat {
    fn eq(&self, other: &Self) -> bool {
        self.collection_index == other.collection_index && self.file == other.file
    }
}

impl Eq for FontCompat {}

impl Hash for FontCompat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file.hash(state);
        self.collection_index.hash(state);
    }
}
