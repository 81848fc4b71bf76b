// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for font families parsed from the platform configuration.

use hashbrown::HashMap;
use smallvec::SmallVec;
use std::path::{Path, PathBuf};

use super::config;

/// Language tag under which families that declare no language are
/// registered.
pub const DEFAULT_LANGUAGE: &str = "";

pub(crate) type FaceVec = SmallVec<[FontFace; 4]>;

/// One concrete face within a family: a font file, a collection index and
/// the weight and style declared for it.
///
/// Faces are immutable once parsed; a face only enters a family if its file
/// existed at parse time.
#[derive(Clone, Debug)]
pub struct FontFace {
    pub(crate) file: PathBuf,
    pub(crate) collection_index: u32,
    pub(crate) weight: i32,
    pub(crate) style: Option<Box<str>>,
}

impl FontFace {
    /// Returns the path of the face's font file.
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Returns the face index within the font file.
    pub fn collection_index(&self) -> u32 {
        self.collection_index
    }

    /// Returns the declared weight, on the conventional 100–900 scale.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Returns the declared style tag, if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub(crate) fn is_italic(&self) -> bool {
        self.style.as_deref() == Some("italic")
    }
}

/// Named group of faces sharing a design, optionally scoped to one or more
/// language tags.
#[derive(Clone, Debug)]
pub struct FontFamily {
    pub(crate) name: Option<Box<str>>,
    pub(crate) languages: Vec<Box<str>>,
    pub(crate) faces: FaceVec,
}

impl FontFamily {
    /// Returns the name of the family, if the configuration declared one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the language tags the family is registered under.
    ///
    /// Empty for families that serve as the default.
    pub fn languages(&self) -> impl Iterator<Item = &str> + '_ {
        self.languages.iter().map(|lang| lang.as_ref())
    }

    /// Returns the faces of the family, in document order.
    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }
}

/// Mapping from language tag to the families registered for it.
///
/// Families sharing a language keep their document order. Built once and
/// never mutated afterwards, so shared reads need no locking.
#[derive(Clone, Default, Debug)]
pub(crate) struct FamilyTable {
    map: HashMap<Box<str>, Vec<FontFamily>>,
}

impl FamilyTable {
    /// Builds the table from the configuration document at `path`, with font
    /// file names resolved against `font_dir`.
    ///
    /// A missing or malformed document yields an empty table; resolution
    /// against an empty table simply finds no match.
    pub(crate) fn from_config(path: &Path, font_dir: &Path) -> Self {
        let mut table = Self::default();
        for family in config::parse_font_config(path, font_dir) {
            table.insert(family);
        }
        table
    }

    fn insert(&mut self, family: FontFamily) {
        if family.languages.is_empty() {
            self.map
                .entry(DEFAULT_LANGUAGE.into())
                .or_default()
                .push(family);
        } else {
            // A family listing several languages is registered under each
            // tag individually.
            for language in &family.languages {
                self.map
                    .entry(language.clone())
                    .or_default()
                    .push(family.clone());
            }
        }
    }

    /// Returns the families registered for the given language tag, in
    /// document order.
    pub(crate) fn get(&self, language: &str) -> &[FontFamily] {
        self.map.get(language).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of language tags with at least one family.
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}
