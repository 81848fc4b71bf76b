// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interface to the platform font matcher capability.
//!
//! Some platforms expose a native matcher that picks a font for a given
//! locale, style and sample text. This module models that capability as an
//! opaque collaborator: an implementation wraps whatever the platform
//! provides, and the *presence* of an implementation is the capability
//! check — no OS version probing happens anywhere in this crate.

use std::path::PathBuf;

/// Family variant selector accepted by the platform matcher.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum FamilyVariant {
    /// No variant preference.
    #[default]
    Default,
    /// Prefer compact variants, for layouts with tight vertical metrics.
    Compact,
    /// Prefer elegant variants.
    Elegant,
}

/// A font chosen by the platform matcher.
#[derive(Clone, Debug)]
pub struct MatchedFont {
    /// Path of the matched font file.
    pub file: PathBuf,
    /// Index of the matched face within the file.
    pub collection_index: u32,
}

/// Platform capability for matching fonts against sample text.
pub trait SystemFontMatcher {
    /// Opens a matching session, or `None` when the capability turns out to
    /// be unavailable.
    fn new_session(&self) -> Option<Box<dyn MatcherSession + '_>>;
}

/// One configured match interaction with the platform matcher.
///
/// Sessions are cheap single-use objects: the resolver creates one per
/// resolution call, configures it, performs one match and drops it. They are
/// not safe to share and must not be cached across calls; implementations
/// release any native resources in `Drop`.
pub trait MatcherSession {
    /// Sets the locales to match for, as a comma separated list of tags.
    fn set_locales(&mut self, locales: &str);

    /// Sets the family variant to prefer.
    fn set_family_variant(&mut self, variant: FamilyVariant);

    /// Sets the desired weight and italic style.
    fn set_style(&mut self, weight: u16, italic: bool);

    /// Matches `text` against the named family, returning the font the
    /// platform chose to render it with.
    fn match_text(&mut self, family: &str, text: &str) -> Option<MatchedFont>;
}

/// The matcher for platforms without the capability; never opens a session.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoopMatcher;

impl SystemFontMatcher for NoopMatcher {
    fn new_session(&self) -> Option<Box<dyn MatcherSession + '_>> {
        None
    }
}
