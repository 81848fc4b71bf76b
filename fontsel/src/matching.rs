// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weight based face matching.

use super::family::FontFace;

/// Returns the index of the best matching face for the given target weight.
///
/// The metric is the absolute distance between declared and requested
/// weight; among equidistant faces the one appearing first in document order
/// wins. Italic faces are never candidates — this selector only serves
/// upright text.
pub(crate) fn match_face(faces: &[FontFace], weight: i32) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, face) in faces.iter().enumerate() {
        if face.is_italic() {
            continue;
        }
        let distance = (face.weight() - weight).abs();
        match best {
            // Strictly closer only; a tie keeps the earlier face.
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::match_face;
    use crate::family::FontFace;

    fn face(weight: i32, style: Option<&str>) -> FontFace {
        FontFace {
            file: "Test.ttf".into(),
            collection_index: 0,
            weight,
            style: style.map(Box::from),
        }
    }

    #[test]
    fn exact_weight_wins() {
        let faces = [face(300, None), face(400, None), face(700, None)];
        assert_eq!(match_face(&faces, 400), Some(1));
    }

    #[test]
    fn closest_weight_wins() {
        let faces = [face(400, None), face(700, None)];
        assert_eq!(match_face(&faces, 500), Some(0), "distance 100 beats 200");
    }

    #[test]
    fn tie_prefers_document_order() {
        let faces = [face(300, None), face(500, None)];
        for _ in 0..8 {
            assert_eq!(match_face(&faces, 400), Some(0));
        }
    }

    #[test]
    fn italic_faces_are_excluded() {
        let faces = [face(400, Some("italic")), face(700, None)];
        assert_eq!(match_face(&faces, 400), Some(1));
    }

    #[test]
    fn all_italic_matches_nothing() {
        let faces = [face(400, Some("italic")), face(700, Some("italic"))];
        assert_eq!(match_face(&faces, 400), None);
    }

    #[test]
    fn empty_family_matches_nothing() {
        assert_eq!(match_face(&[], 400), None);
    }

    #[test]
    fn other_style_tags_remain_eligible() {
        let faces = [face(400, Some("condensed"))];
        assert_eq!(match_face(&faces, 400), Some(0));
    }
}
