// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! System font resolution by locale and weight.
//!
//! This crate answers one question for UI text: given a locale and a desired
//! font weight, which concrete font file (and face index within it) should be
//! used to render that locale's script? Two strategies cooperate behind
//! [`FontResolver`]:
//!
//! - a legacy path that parses the platform font configuration document into
//!   per-language family tables and picks the non-italic face closest in
//!   weight, and
//! - a modern path that delegates to an opaque platform matcher implementing
//!   [`SystemFontMatcher`], probed with a short sample of the locale's
//!   script.
//!
//! A small replacement table is applied to whichever result survives, so
//! known-bad files can be substituted without touching the tables.
//!
//! Every failure mode — missing configuration, malformed entries, vanished
//! files — degrades to "no match"; nothing in this crate panics on bad
//! platform state.

mod config;
mod family;
mod font;
mod matcher;
mod matching;
mod probe;
mod resolver;

pub use family::{DEFAULT_LANGUAGE, FontFace, FontFamily};
pub use font::FontCompat;
pub use matcher::{FamilyVariant, MatchedFont, MatcherSession, NoopMatcher, SystemFontMatcher};
pub use resolver::{FontResolver, ResolverOptions, WEIGHT_BOLD, WEIGHT_REGULAR};
