// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Naive parser for the platform font configuration document.
//!
//! The document is a `familyset` root holding `family` elements, each
//! holding `font` elements whose text content is a file name relative to the
//! system font directory. Only the attributes resolution needs are read;
//! everything else is skipped without aborting the parse.

use roxmltree::{Document, Node};
use std::path::Path;
use std::str::FromStr;

use super::family::{FaceVec, FontFace, FontFamily};

/// Weight assumed for faces that do not declare one.
const DEFAULT_WEIGHT: i32 = 400;

/// Parses the font configuration document at `path`.
///
/// Font file names are resolved against `font_dir`; faces whose file does
/// not exist are dropped, as are families left with no faces. A missing or
/// malformed document yields no families — the caller treats that exactly
/// like a configuration that declares nothing.
pub(crate) fn parse_font_config(path: &Path, font_dir: &Path) -> Vec<FontFamily> {
    let Ok(text) = std::fs::read_to_string(path) else {
        log::debug!("no font configuration at {}", path.display());
        return Vec::new();
    };
    let Ok(doc) = Document::parse(&text) else {
        log::warn!("malformed font configuration at {}", path.display());
        return Vec::new();
    };
    let root = doc.root_element();
    if root.tag_name().name() != "familyset" {
        log::warn!(
            "font configuration at {} does not start with familyset",
            path.display()
        );
        return Vec::new();
    }
    let mut families = Vec::new();
    for child in root.children() {
        // Aliases and any element newer than this parser are skipped
        // wholesale, subtree included.
        if child.tag_name().name() != "family" {
            continue;
        }
        if let Some(family) = parse_family(child, font_dir) {
            families.push(family);
        }
    }
    families
}

fn parse_family(node: Node<'_, '_>, font_dir: &Path) -> Option<FontFamily> {
    let name = node.attribute("name").map(Box::from);
    let languages = node
        .attribute("lang")
        .map(split_languages)
        .unwrap_or_default();
    let mut faces = FaceVec::new();
    for child in node.children() {
        if child.tag_name().name() != "font" {
            continue;
        }
        if let Some(face) = parse_font(child, font_dir) {
            faces.push(face);
        }
    }
    if faces.is_empty() {
        // Every face was dropped; an empty family is never registered.
        return None;
    }
    Some(FontFamily {
        name,
        languages,
        faces,
    })
}

fn parse_font(node: Node<'_, '_>, font_dir: &Path) -> Option<FontFace> {
    let weight = numeric_attribute(node, "weight", DEFAULT_WEIGHT)?;
    let collection_index = numeric_attribute(node, "index", 0_u32)?;
    let style = node.attribute("style").map(Box::from);
    let file_name = node.text().map(str::trim).filter(|name| !name.is_empty())?;
    let file = font_dir.join(file_name);
    if !file.is_file() {
        return None;
    }
    Some(FontFace {
        file,
        collection_index,
        weight,
        style,
    })
}

/// Reads a numeric attribute, substituting `default` when it is absent.
///
/// A value that is present but fails to parse fails the whole entry, not
/// just the attribute.
fn numeric_attribute<T: FromStr>(node: Node<'_, '_>, name: &str, default: T) -> Option<T> {
    let Some(value) = node.attribute(name) else {
        return Some(default);
    };
    match value.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("dropping font entry with non-numeric {name} {value:?}");
            None
        }
    }
}

fn split_languages(lang: &str) -> Vec<Box<str>> {
    lang.split(',')
        .filter(|tag| !tag.is_empty())
        .map(Box::from)
        .collect()
}
