// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample text for probing the platform matcher.

/// Returns a short string representative of the script the given language is
/// normally written in.
///
/// This is a fixed lookup by language, not script detection: the table only
/// distinguishes the scripts the resolution tables care about, and every
/// other language probes with Latin text.
pub(crate) fn probe_text(language: &str) -> &'static str {
    // Compare the primary subtag so regional forms like `zh-Hant` or `ja-JP`
    // land with their base language.
    let primary = language.split(['-', '_']).next().unwrap_or(language);
    match primary {
        "ja" | "zh" => "\u{6c38}", // 永
        "ko" => "\u{d55c}",        // 한
        "ar" => "\u{627}",         // ا
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::probe_text;

    #[test]
    fn probe_follows_primary_subtag() {
        assert_eq!(probe_text("zh-Hant"), probe_text("zh"));
        assert_eq!(probe_text("ja-JP"), probe_text("ja"));
        assert_eq!(probe_text("ko_KR"), probe_text("ko"));
    }

    #[test]
    fn probe_defaults_to_latin() {
        assert_eq!(probe_text("en"), "a");
        assert_eq!(probe_text("de-DE"), "a");
        assert_eq!(probe_text(""), "a");
    }

    #[test]
    fn probe_scripts_are_distinct() {
        assert_ne!(probe_text("ja"), probe_text("ko"));
        assert_ne!(probe_text("ko"), probe_text("ar"));
        assert_ne!(probe_text("ar"), probe_text("en"));
    }
}
