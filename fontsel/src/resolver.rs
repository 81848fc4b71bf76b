// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution facade over the legacy tables and the platform matcher.

use hashbrown::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::family::{DEFAULT_LANGUAGE, FamilyTable, FontFamily};
use super::font::FontCompat;
use super::matcher::{FamilyVariant, SystemFontMatcher};
use super::matching::match_face;
use super::probe::probe_text;

/// Weight requested for the regular member of a font pair.
pub const WEIGHT_REGULAR: i32 = 400;

/// Weight requested for the bold member of a font pair.
pub const WEIGHT_BOLD: i32 = 700;

/// Family name handed to the platform matcher together with the probe text.
const MATCH_FAMILY: &str = "sans-serif";

/// Options for building a [`FontResolver`].
#[derive(Default)]
pub struct ResolverOptions {
    /// Path of the font configuration document.
    ///
    /// Defaults to `etc/fonts.xml` under the platform root.
    pub config_path: Option<PathBuf>,

    /// Directory that font file names in the configuration document are
    /// relative to.
    ///
    /// Defaults to `fonts` under the platform root.
    pub font_dir: Option<PathBuf>,

    /// Replacement table applied after resolution.
    ///
    /// `None` selects the built-in table; pass an empty vector to disable
    /// replacement entirely.
    pub overrides: Option<Vec<(FontCompat, FontCompat)>>,

    /// The platform matcher capability, when the platform has one.
    pub matcher: Option<Box<dyn SystemFontMatcher + Send + Sync>>,
}

/// Resolves the concrete font file and face index to use for a locale and
/// weight.
///
/// The resolver owns its family table: the table is built from the
/// configuration document on the first resolution — exactly once, even under
/// concurrent first access — and never mutated afterwards, so a resolver can
/// be shared freely between threads.
pub struct FontResolver {
    config_path: PathBuf,
    font_dir: PathBuf,
    overrides: HashMap<FontCompat, FontCompat>,
    matcher: Option<Box<dyn SystemFontMatcher + Send + Sync>>,
    table: OnceLock<FamilyTable>,
}

impl FontResolver {
    /// Creates a resolver with the given options.
    ///
    /// This is cheap; the configuration document is not read until the first
    /// resolution asks for it.
    pub fn new(options: ResolverOptions) -> Self {
        let root = platform_root();
        let font_dir = options.font_dir.unwrap_or_else(|| root.join("fonts"));
        let overrides = options
            .overrides
            .unwrap_or_else(|| builtin_overrides(&font_dir))
            .into_iter()
            .collect();
        Self {
            config_path: options
                .config_path
                .unwrap_or_else(|| root.join("etc/fonts.xml")),
            font_dir,
            overrides,
            matcher: options.matcher,
            table: OnceLock::new(),
        }
    }

    /// Resolves the font for upright text in the given locale and weight.
    pub fn resolve(&self, locale: &str, weight: i32) -> Option<FontCompat> {
        self.resolve_with_style(locale, weight, false)
    }

    /// Resolves the font for the given locale, weight and italic flag.
    ///
    /// The italic flag only reaches the platform matcher; the legacy tables
    /// never serve italic faces.
    pub fn resolve_with_style(
        &self,
        locale: &str,
        weight: i32,
        italic: bool,
    ) -> Option<FontCompat> {
        let modern = self.match_system(locale, weight, italic);
        // The table result wins when both paths produce one; the opaque
        // matcher only decides locales the shipped tables never covered.
        let result = self.match_legacy(locale, weight).or(modern)?;
        Some(self.apply_override(result))
    }

    /// Resolves the regular and bold fonts for the given locale.
    pub fn resolve_pair(&self, locale: &str) -> Option<(FontCompat, FontCompat)> {
        Some((
            self.resolve(locale, WEIGHT_REGULAR)?,
            self.resolve(locale, WEIGHT_BOLD)?,
        ))
    }

    /// Validates a user-chosen font file, returning its handle only when the
    /// file exists.
    ///
    /// A stale custom font preference thereby degrades to "no match" rather
    /// than pointing the renderer at a missing file.
    pub fn resolve_custom(
        &self,
        path: impl Into<PathBuf>,
        collection_index: u32,
    ) -> Option<FontCompat> {
        let font = FontCompat::new(path, collection_index);
        font.exists().then_some(font)
    }

    /// Returns the families registered for the given language tag, in
    /// document order.
    pub fn families(&self, language: &str) -> &[FontFamily] {
        self.table().get(language)
    }

    fn table(&self) -> &FamilyTable {
        self.table.get_or_init(|| {
            let table = FamilyTable::from_config(&self.config_path, &self.font_dir);
            log::debug!("built font family table for {} languages", table.len());
            table
        })
    }

    fn match_legacy(&self, locale: &str, weight: i32) -> Option<FontCompat> {
        let language = canonical_language(locale);
        let table = self.table();
        let mut families = table.get(&language);
        if families.is_empty() {
            families = table.get(DEFAULT_LANGUAGE);
        }
        // Only the first family registered for a language is consulted.
        let family = families.first()?;
        let face = &family.faces()[match_face(family.faces(), weight)?];
        Some(FontCompat::new(face.path(), face.collection_index()))
    }

    fn match_system(&self, locale: &str, weight: i32, italic: bool) -> Option<FontCompat> {
        let matcher = self.matcher.as_ref()?;
        // One session per call; dropped (and released) before returning.
        let mut session = matcher.new_session()?;
        session.set_locales(locale);
        session.set_family_variant(FamilyVariant::Default);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to the platform's 0..=1000 weight scale"
        )]
        session.set_style(weight.clamp(0, 1000) as u16, italic);
        let matched = session.match_text(MATCH_FAMILY, probe_text(locale))?;
        let font = FontCompat::new(matched.file, matched.collection_index);
        font.exists().then_some(font)
    }

    fn apply_override(&self, font: FontCompat) -> FontCompat {
        match self.overrides.get(&font) {
            // A replacement whose file has gone missing is ignored.
            Some(replacement) if replacement.exists() => replacement.clone(),
            _ => font,
        }
    }
}

/// Root of the platform file system tree, `/system` unless overridden.
fn platform_root() -> PathBuf {
    std::env::var_os("ANDROID_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/system"))
}

/// The built-in replacement table: Droid era files superseded by their
/// current equivalents.
fn builtin_overrides(font_dir: &Path) -> Vec<(FontCompat, FontCompat)> {
    [
        (("DroidSans.ttf", 0), ("Roboto-Regular.ttf", 0)),
        (("DroidSans-Bold.ttf", 0), ("Roboto-Bold.ttf", 0)),
        (("DroidSansFallback.ttf", 0), ("NotoSansCJK-Regular.ttc", 0)),
    ]
    .into_iter()
    .map(|((from, from_index), (to, to_index))| {
        (
            FontCompat::new(font_dir.join(from), from_index),
            FontCompat::new(font_dir.join(to), to_index),
        )
    })
    .collect()
}

/// Canonicalizes an incoming locale into the tag form the family table is
/// keyed by.
///
/// Separators are normalized and any encoding or modifier suffix is cut off;
/// the regional Chinese tags are remapped onto the script tags the
/// configuration registers those families under. This is a fixed table, not
/// general locale matching.
fn canonical_language(locale: &str) -> String {
    let mut tag = locale.trim().to_string();
    if let Some(pos) = tag.find(['.', '@']) {
        tag.truncate(pos);
    }
    let tag = tag.replace('_', "-");
    for (regional, script) in [
        ("zh-CN", "zh-Hans"),
        ("zh-SG", "zh-Hans"),
        ("zh-Hans", "zh-Hans"),
        ("zh-TW", "zh-Hant"),
        ("zh-HK", "zh-Hant"),
        ("zh-MO", "zh-Hant"),
        ("zh-Hant", "zh-Hant"),
    ] {
        if tag.eq_ignore_ascii_case(regional) {
            return script.to_string();
        }
    }
    tag
}

#[cfg(test)]
mod tests {
    use super::canonical_language;

    #[test]
    fn chinese_regions_remap_to_script_tags() {
        assert_eq!(canonical_language("zh-CN"), "zh-Hans");
        assert_eq!(canonical_language("zh_CN"), "zh-Hans");
        assert_eq!(canonical_language("zh-SG"), "zh-Hans");
        assert_eq!(canonical_language("zh-TW"), "zh-Hant");
        assert_eq!(canonical_language("zh_TW"), "zh-Hant");
        assert_eq!(canonical_language("zh-HK"), "zh-Hant");
    }

    #[test]
    fn script_tags_pass_through_with_casing_fixed() {
        assert_eq!(canonical_language("zh-hans"), "zh-Hans");
        assert_eq!(canonical_language("ZH-HANT"), "zh-Hant");
    }

    #[test]
    fn other_locales_keep_their_tag() {
        assert_eq!(canonical_language("ja"), "ja");
        assert_eq!(canonical_language("en_US"), "en-US");
        assert_eq!(canonical_language(" ko "), "ko");
    }

    #[test]
    fn posix_suffixes_are_cut_off() {
        assert_eq!(canonical_language("en_US.UTF-8"), "en-US");
        assert_eq!(canonical_language("sr@latin"), "sr");
    }
}
