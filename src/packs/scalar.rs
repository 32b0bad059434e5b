//! YAML rendering for textually inserted scalar values

/// Render a string value for use after `img: ` in a YAML document.
///
/// Quoting is delegated to serde_yml, so any value its parser would read
/// back as a non-string (`true`, `null`, `42`, hex lookalikes) comes out
/// quoted, and asset paths (`systems/swnr/assets/...`) stay plain.
/// Returns `None` when the rendered scalar spans multiple lines and
/// cannot be inserted as a single `img:` line.
pub fn format_scalar(value: &str) -> Option<String> {
    let rendered = serde_yml::to_string(&value).ok()?;
    let rendered = rendered.trim_end_matches('\n');
    if rendered.contains('\n') {
        return None;
    }
    Some(rendered.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parsing the rendered scalar must give back the original string.
    fn round_trip(value: &str) {
        let rendered = format_scalar(value).unwrap();
        let parsed: String = serde_yml::from_str(&rendered).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_asset_paths_stay_plain() {
        assert_eq!(
            format_scalar("systems/swnr/assets/icons/game-icons.net/item-icons/weapon-white.svg")
                .as_deref(),
            Some("systems/swnr/assets/icons/game-icons.net/item-icons/weapon-white.svg")
        );
        assert_eq!(
            format_scalar("icons/svg/mystery-man.svg").as_deref(),
            Some("icons/svg/mystery-man.svg")
        );
    }

    #[test]
    fn test_nonstring_lookalikes_get_quoted() {
        for value in ["null", "~", "true", "False", "42", "3.5"] {
            round_trip(value);
            assert_ne!(format_scalar(value).unwrap(), value);
        }
    }

    #[test]
    fn test_hex_lookalike_round_trips() {
        round_trip("0x1F");
    }

    #[test]
    fn test_empty_and_special_values_round_trip() {
        round_trip("");
        round_trip("@odd");
        round_trip("a: b");
        round_trip("say \"hi\"");
    }

    #[test]
    fn test_multiline_values_cannot_be_inserted() {
        assert_eq!(format_scalar("a\nb"), None);
    }
}
