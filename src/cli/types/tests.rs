//! Unit tests for tag and count wrappers

use super::*;
use crate::error::ClashError;
use std::str::FromStr;

#[cfg(test)]
mod player_tag_tests {
    use super::*;

    #[test]
    fn test_player_tag_keeps_canonical_form() {
        let tag = PlayerTag::new("#2PP").unwrap();
        assert_eq!(tag.as_str(), "#2PP");
    }

    #[test]
    fn test_player_tag_adds_hash_and_uppercases() {
        let tag = PlayerTag::from_str("9luq8vrj").unwrap();
        assert_eq!(tag.to_string(), "#9LUQ8VRJ");
    }

    #[test]
    fn test_player_tag_trims_whitespace() {
        let tag = PlayerTag::new("  #abc \n").unwrap();
        assert_eq!(tag.as_str(), "#ABC");
    }

    #[test]
    fn test_player_tag_rejects_empty() {
        assert!(PlayerTag::new("").is_err());
        assert!(PlayerTag::new("#").is_err());
        assert!(PlayerTag::new("   ").is_err());
    }

    #[test]
    fn test_player_tag_rejects_bad_characters() {
        match PlayerTag::new("#AB-C").unwrap_err() {
            ClashError::InvalidTag { tag } => assert_eq!(tag, "#AB-C"),
            _ => panic!("Expected InvalidTag error"),
        }
        assert!(PlayerTag::new("##ABC").is_err());
        assert!(PlayerTag::new("AB C").is_err());
    }

    #[test]
    fn test_player_tag_url_encoded() {
        let tag = PlayerTag::new("#Q8VRJ").unwrap();
        assert_eq!(tag.url_encoded(), "%23Q8VRJ");
    }

    #[test]
    fn test_player_tag_serde() {
        let tag = PlayerTag::new("2pp").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r##""#2PP""##);

        let deserialized: PlayerTag = serde_json::from_str(r#""2pp""#).unwrap();
        assert_eq!(deserialized, tag);
    }

    #[test]
    fn test_player_tag_serde_rejects_invalid() {
        let result: std::result::Result<PlayerTag, _> = serde_json::from_str(r#""!!""#);
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod clan_tag_tests {
    use super::*;

    #[test]
    fn test_clan_tag_normalizes() {
        let tag = ClanTag::from_str("2y0yrgg8").unwrap();
        assert_eq!(tag.as_str(), "#2Y0YRGG8");
        assert_eq!(tag.url_encoded(), "%232Y0YRGG8");
    }

    #[test]
    fn test_clan_tag_rejects_empty() {
        assert!(ClanTag::new("#").is_err());
    }
}

#[cfg(test)]
mod invite_count_tests {
    use super::*;

    #[test]
    fn test_invite_count_parses_positive() {
        let count = InviteCount::from_str("25").unwrap();
        assert_eq!(count.as_u32(), 25);
        assert_eq!(count.to_string(), "25");
    }

    #[test]
    fn test_invite_count_trims_line_ending() {
        let count = InviteCount::from_str("3\n").unwrap();
        assert_eq!(count.as_u32(), 3);
    }

    #[test]
    fn test_invite_count_rejects_zero() {
        assert!(InviteCount::from_str("0").is_err());
        assert!(InviteCount::new(0).is_err());
    }

    #[test]
    fn test_invite_count_rejects_non_digits() {
        for input in ["", "abc", "-5", "+5", "1.5", "1 2"] {
            match InviteCount::from_str(input) {
                Err(ClashError::InvalidCount { .. }) => (),
                other => panic!("Expected InvalidCount for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invite_count_rejects_overflow() {
        assert!(InviteCount::from_str("99999999999").is_err());
    }
}
