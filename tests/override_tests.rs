use cf_config_sync::document::Position3D;
use cf_config_sync::error::MergeError;
use cf_config_sync::overrides::{MarkerType, OverrideSet};
use cf_config_sync::trajectory::PositionMap;

fn parse(specs: &[&str]) -> Result<OverrideSet, MergeError> {
    let specs: Vec<String> = specs.iter().map(|s| s.to_string()).collect();
    OverrideSet::parse(&specs)
}

fn position_map(ids: &[u32]) -> PositionMap {
    ids.iter()
        .map(|&id| (id, Position3D { x: 0.0, y: 0.0, z: 0.0 }))
        .collect()
}

#[cfg(test)]
mod grammar_tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let set = parse(&["id=3,ch=80,ty=large"]).expect("should parse");
        let ovr = set.get(3).expect("id 3 should be present");
        assert_eq!(ovr.channel, Some(80));
        assert_eq!(ovr.marker_type, Some(MarkerType::Large));
    }

    #[test]
    fn test_slash_separated_segments() {
        let set = parse(&["id=3,ch=80,ty=large/id=5,ch=100/id=1,ty=default"]).expect("should parse");
        assert!(set.get(1).is_some());
        assert!(set.get(3).is_some());
        assert_eq!(set.get(5).unwrap().channel, Some(100));
        assert_eq!(set.get(5).unwrap().marker_type, None);
    }

    #[test]
    fn test_repeated_set_arguments() {
        let set = parse(&["id=1,ch=80", "id=2,ch=100"]).expect("should parse");
        assert!(set.get(1).is_some());
        assert!(set.get(2).is_some());
    }

    #[test]
    fn test_alias_keys() {
        let set = parse(&["id=4,channel=100,type=medium"]).expect("aliases should parse");
        let ovr = set.get(4).unwrap();
        assert_eq!(ovr.channel, Some(100));
        assert_eq!(ovr.marker_type, Some(MarkerType::Medium));
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let set = parse(&["id=3,ch=80/id=3,ch=100"]).expect("should parse");
        assert_eq!(set.get(3).unwrap().channel, Some(100));
    }

    #[test]
    fn test_defaults_apply_only_with_an_override_entry() {
        let set = parse(&["id=6"]).expect("bare id should parse");
        let ovr = set.get(6).unwrap();
        assert_eq!(ovr.channel, None);
        assert_eq!(ovr.marker_type, None);
        assert_eq!(ovr.effective_channel(), 80);
        assert_eq!(ovr.effective_type(), MarkerType::DefaultSingleMarker);
        assert!(set.get(7).is_none(), "no entry, no defaults");
    }

    #[test]
    fn test_missing_equals_is_syntax_error() {
        let err = parse(&["id=3,ch80"]).unwrap_err();
        assert!(matches!(err, MergeError::BadOverrideSyntax { .. }), "got {err:?}");
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn test_unknown_key_is_syntax_error() {
        let err = parse(&["id=3,color=red"]).unwrap_err();
        assert!(matches!(err, MergeError::BadOverrideSyntax { .. }), "got {err:?}");
    }

    #[test]
    fn test_non_digit_id_is_syntax_error() {
        let err = parse(&["id=abc,ch=80"]).unwrap_err();
        assert!(matches!(err, MergeError::BadOverrideSyntax { .. }), "got {err:?}");
    }

    #[test]
    fn test_channel_outside_allowed_set_is_rejected() {
        let err = parse(&["id=3,ch=90"]).unwrap_err();
        assert!(matches!(err, MergeError::DisallowedOverrideValue { .. }), "got {err:?}");
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn test_negative_channel_is_rejected() {
        let err = parse(&["id=3,ch=-80"]).unwrap_err();
        assert!(matches!(err, MergeError::DisallowedOverrideValue { .. }), "got {err:?}");
    }

    #[test]
    fn test_unknown_marker_type_is_rejected() {
        let err = parse(&["id=3,ty=gigantic"]).unwrap_err();
        assert!(matches!(err, MergeError::DisallowedOverrideValue { .. }), "got {err:?}");
    }

    #[test]
    fn test_marker_type_tokens_are_case_sensitive() {
        let err = parse(&["id=3,ty=Large"]).unwrap_err();
        assert!(matches!(err, MergeError::DisallowedOverrideValue { .. }), "got {err:?}");
    }

    #[test]
    fn test_segment_without_id_is_rejected() {
        let err = parse(&["ch=80,ty=large"]).unwrap_err();
        assert!(matches!(err, MergeError::MissingOverrideId { .. }), "got {err:?}");
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn test_blank_segments_and_pairs_are_ignored() {
        let set = parse(&["/id=3,ch=80,/"]).expect("blank pieces are skipped");
        assert!(set.get(3).is_some());
    }

    #[test]
    fn test_whitespace_around_pairs_is_trimmed() {
        let set = parse(&[" id=3 , ch=100 "]).expect("should parse");
        assert_eq!(set.get(3).unwrap().channel, Some(100));
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_all_ids_known_passes() {
        let set = parse(&["id=1/id=3"]).unwrap();
        set.validate_against(&position_map(&[1, 2, 3]))
            .expect("every override id is in the map");
    }

    #[test]
    fn test_unknown_ids_reported_sorted() {
        let set = parse(&["id=9/id=2/id=7"]).unwrap();
        let err = set.validate_against(&position_map(&[2])).unwrap_err();
        match err {
            MergeError::OverrideIdNotInSource { ref ids } => {
                assert_eq!(ids, &vec![7, 9], "offending ids in ascending order");
            }
            other => panic!("expected OverrideIdNotInSource, got {other:?}"),
        }
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_override_against_empty_map_fails() {
        let set = parse(&["id=7,ch=100"]).unwrap();
        let err = set.validate_against(&PositionMap::new()).unwrap_err();
        assert!(matches!(err, MergeError::OverrideIdNotInSource { .. }), "got {err:?}");
    }

    #[test]
    fn test_empty_set_always_validates() {
        OverrideSet::default()
            .validate_against(&PositionMap::new())
            .expect("nothing to validate");
    }

    #[test]
    fn test_marker_type_token_roundtrip() {
        for token in ["default", "defaultSingleMarker", "CF21SingleMarker", "medium", "large"] {
            let spec = format!("id=1,ty={token}");
            let set = parse(&[spec.as_str()]).expect("known token should parse");
            assert_eq!(set.get(1).unwrap().effective_type().as_token(), token);
        }
    }
}
