// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

#[test]
fn placeholders() {
    assert!(is_placeholder(""));
    assert!(is_placeholder(" \t"));
    assert!(is_placeholder("REPLACE_ME"));
    assert!(is_placeholder("  replace_email"));
    assert!(!is_placeholder("REPLACE"));
    assert!(!is_placeholder("Jane"));
}

#[test]
fn field_trims_present_values() {
    assert_eq!(Some("Jane Doe".to_owned()), field("  Jane Doe "));
    assert_eq!(None, field("REPLACE_NAME"));
}

#[test]
fn parse_json_with_placeholders_and_missing_keys() {
    let profile = BusinessProfile::from_json_str(
        r#"{
            "fullName": " Jane Doe ",
            "company": "REPLACE_COMPANY",
            "phoneTel": 5551234567,
            "email": "",
            "website": null,
            "unrelated": "ignored"
        }"#,
    )
    .unwrap();
    assert_eq!(
        BusinessProfile {
            full_name: Some("Jane Doe".to_owned()),
            phone_tel: Some("5551234567".to_owned()),
            ..Default::default()
        },
        profile
    );
}

#[test]
fn parse_json_rejects_malformed_input() {
    assert!(matches!(
        BusinessProfile::from_json_str("[]"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        BusinessProfile::from_json_str(r#"["Jane Doe", "Acme"]"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(BusinessProfile::from_json_str(r#"{"fullName": ["Jane"]}"#).is_err());
    assert!(BusinessProfile::from_json_str("{").is_err());
}

#[test]
fn collect_from_entries() {
    let profile = BusinessProfile::from_entries([
        ("fullName", "Jane"),
        ("eliteCtaUrl", "example.com/bonus"),
        ("tagline", "REPLACE_TAGLINE"),
        ("nickname", "JD"),
        ("fullName", "Jane Doe"),
    ]);
    assert_eq!(Some("Jane Doe"), profile.full_name.as_deref());
    assert_eq!(Some("example.com/bonus"), profile.elite_cta_url.as_deref());
    assert_eq!(None, profile.tagline);
}
