//! URL path segment encoding for user-provided names.
//!
//! Macro, saved-search, stanza and input names are placed into URL paths.
//! Saved search names such as `Summarize Electricity CO2e/kWh V1.0` contain
//! `/`, which must become `%2F` or the request hits the wrong resource.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a single path segment.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'=')
    .add(b'[')
    .add(b']');

/// Encode one path segment (e.g. a saved search name).
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("power-otel"), "power-otel");
        assert_eq!(encode_path_segment("electricity_carbon_intensity"), "electricity_carbon_intensity");
    }

    #[test]
    fn test_encode_saved_search_names() {
        assert_eq!(
            encode_path_segment("Summarize Electricity CO2e/kWh V1.0"),
            "Summarize%20Electricity%20CO2e%2FkWh%20V1.0"
        );
        assert_eq!(
            encode_path_segment("Summarize Asset CO2e & kW V1.0"),
            "Summarize%20Asset%20CO2e%20%26%20kW%20V1.0"
        );
    }

    #[test]
    fn test_encode_stanza_name() {
        assert_eq!(
            encode_path_segment("electricity_maps_carbon_intensity_latest://electricitymapslatest"),
            "electricity_maps_carbon_intensity_latest:%2F%2Felectricitymapslatest"
        );
    }

    #[test]
    fn test_encode_percent_prevents_double_decoding() {
        assert_eq!(encode_path_segment("100%"), "100%25");
    }

    mod proptests {
        use super::*;
        use percent_encoding::percent_decode_str;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_segment_decodes_to_input(name in "\\PC{0,40}") {
                let encoded = encode_path_segment(&name);
                let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
                prop_assert_eq!(decoded, name.as_str());
            }

            #[test]
            fn test_segment_never_splits_the_path(name in "[ -~]{0,40}") {
                let encoded = encode_path_segment(&name);
                prop_assert!(!encoded.contains(['/', '?', '#', ' ']));
            }
        }
    }
}
