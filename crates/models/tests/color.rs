use petstore_core::config::MultipartConfig;
use petstore_core::{
    HttpContent, JsonConvertible, ModelError, MultipartConvertible, MultipartFormData,
};
use petstore_models::Color;
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashSet;
use strum::VariantArray;

const TOKENS: [&str; 5] = ["BLACK", "WHITE", "BROWN", "GOLDEN", "MIXED"];

#[test]
fn json_round_trip_for_every_token() {
    for token in TOKENS {
        let color = Color::decode_json(&json!(token)).unwrap();
        assert_eq!(color.to_json(), json!(token));
    }
}

#[test]
fn tables_are_a_bijection() {
    let tokens: HashSet<&str> = Color::VARIANTS.iter().map(|c| c.as_str()).collect();
    assert_eq!(tokens.len(), Color::VARIANTS.len(), "two variants share a token");

    for color in Color::VARIANTS {
        assert_eq!(Color::from_token(color.as_str()).unwrap(), *color);
    }
}

#[test]
fn rejects_tokens_outside_the_set() {
    for token in ["PURPLE", "", "black", "Black", "TABBY", " BLACK", "BLACK "] {
        let err = Color::decode_json(&json!(token)).unwrap_err();
        assert!(
            matches!(err, ModelError::UnknownEnumToken { model: "Color", token: ref t, .. } if t == token),
            "unexpected error for {token:?}: {err}"
        );
    }
}

#[test]
fn rejects_non_string_json() {
    for value in [json!(null), json!(0), json!(["BLACK"]), json!({ "value": "BLACK" }), json!(true)] {
        let err = Color::decode_json(&value).unwrap_err();
        assert!(matches!(err, ModelError::UnexpectedJsonType { model: "Color", .. }), "{err}");
    }
}

#[test]
fn golden_mixed_tabby_scenario() {
    assert_eq!(Color::Golden.to_json(), json!("GOLDEN"));
    assert_eq!(Color::decode_json(&json!("MIXED")).unwrap(), Color::Mixed);
    assert!(Color::decode_json(&json!("TABBY")).is_err());
}

#[test]
fn multipart_round_trip_uses_prefix_as_field_name() {
    let mut form = MultipartFormData::with_config(&MultipartConfig {
        boundary: Some("b".to_owned()),
        ..MultipartConfig::default()
    });
    Color::Brown.to_multipart(&mut form, "color");

    let part = form.get_content("color").expect("field named by prefix");
    assert_eq!(part.text_value(), "BROWN");
    assert_eq!(part.content_type(), "text/plain");

    assert_eq!(Color::decode_multipart(&form, "color").unwrap(), Color::Brown);
    assert_eq!(
        form.to_bytes().unwrap(),
        b"--b\r\nContent-Disposition: form-data; name=\"color\"\r\nContent-Type: text/plain\r\n\r\nBROWN\r\n--b--\r\n"
    );
}

#[test]
fn multipart_missing_field_is_an_error() {
    let mut form = MultipartFormData::new();
    Color::White.to_multipart(&mut form, "coat");

    let err = Color::decode_multipart(&form, "color").unwrap_err();
    assert!(matches!(err, ModelError::MissingField { ref field, .. } if field == "color"));
}

#[test]
fn multipart_unknown_token_is_an_error() {
    let mut form = MultipartFormData::new();
    form.add_text("color", "white");

    let err = Color::decode_multipart(&form, "color").unwrap_err();
    assert!(matches!(err, ModelError::UnknownEnumToken { ref token, .. } if token == "white"));
}

#[test]
fn multipart_non_utf8_content_is_rejected_as_lossy_token() {
    let mut form = MultipartFormData::new();
    form.add(HttpContent::new("color", vec![b'B', 0xFF]));

    let err = Color::decode_multipart(&form, "color").unwrap_err();
    assert!(
        matches!(err, ModelError::UnknownEnumToken { model: "Color", ref token, .. } if token == "B\u{FFFD}"),
        "{err}"
    );
}

#[test]
fn string_conversions_agree() {
    assert_eq!("GOLDEN".parse::<Color>().unwrap(), Color::Golden);
    assert_eq!(Color::try_from("WHITE").unwrap(), Color::White);
    assert!("Golden".parse::<Color>().is_err());
    assert_eq!(serde_json::Value::from(Color::Mixed), json!("MIXED"));
}

proptest! {
    #[test]
    fn arbitrary_strings_decode_only_when_canonical(token in ".*") {
        match Color::from_token(&token) {
            Ok(color) => {
                prop_assert_eq!(color.as_str(), token.as_str());
            },
            Err(err) => {
                prop_assert!(!TOKENS.contains(&token.as_str()));
                prop_assert!(matches!(err, ModelError::UnknownEnumToken { .. }), "unexpected error kind");
            },
        }
    }

    #[test]
    fn case_variants_of_tokens_are_rejected(index in 0usize..5, flips in proptest::collection::vec(any::<bool>(), 6)) {
        let token: String = TOKENS[index]
            .chars()
            .zip(flips.iter().cycle())
            .map(|(c, flip)| if *flip { c.to_ascii_lowercase() } else { c })
            .collect();
        prop_assume!(token != TOKENS[index]);
        prop_assert!(Color::from_token(&token).is_err());
    }
}
