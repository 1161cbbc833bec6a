// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

use proptest::prelude::*;
use url::Url;

use super::*;

fn url(input: &str) -> Url {
    Url::parse(input).unwrap()
}

#[test]
fn parse_ignores_case_and_surrounding_whitespace() {
    assert_eq!(Ok(Tier::Elite), " Elite\t".parse());
    assert_eq!(Ok(Tier::Pro), "PRO".parse());
    assert_eq!(Ok(Tier::Starter), "starter".parse());
    assert!("gold".parse::<Tier>().is_err());
    assert!("".parse::<Tier>().is_err());
}

#[test]
fn display_lowercase_name() {
    for tier in Tier::ALL {
        assert_eq!(tier.as_str(), tier.to_string());
        assert_eq!(tier.as_str().to_uppercase(), tier.badge_label());
    }
}

#[test]
fn search_param_takes_precedence_over_hash() {
    assert_eq!(
        Tier::Pro,
        resolve_tier(Some("tier=pro"), Some("tier=elite"), Tier::Starter)
    );
    assert_eq!(
        Tier::Elite,
        resolve_tier(Some("?foo=bar&tier=elite"), None, Tier::Starter)
    );
}

#[test]
fn empty_search_param_falls_back_to_hash() {
    assert_eq!(
        Tier::Elite,
        resolve_tier(Some("tier="), Some("tier=elite"), Tier::Starter)
    );
}

#[test]
fn hash_forms() {
    assert_eq!(Tier::Elite, resolve_tier(None, Some("#tier=elite"), Tier::Starter));
    assert_eq!(Tier::Elite, resolve_tier(None, Some("tier=elite"), Tier::Starter));
    assert_eq!(Tier::Pro, resolve_tier(None, Some("#?tier=pro"), Tier::Starter));
    assert_eq!(Tier::Pro, resolve_tier(None, Some("#a=1&tier=PRO"), Tier::Starter));
}

#[test]
fn bare_hash_names_the_tier() {
    assert_eq!(Tier::Elite, resolve_tier(None, Some("#elite"), Tier::Starter));
    assert_eq!(Tier::Pro, resolve_tier(None, Some("Pro"), Tier::Elite));
    // Anchors that are no tier names keep the previous tier.
    assert_eq!(Tier::Pro, resolve_tier(None, Some("#contact"), Tier::Pro));
}

#[test]
fn bare_hash_is_ignored_after_a_failed_assignment() {
    assert_eq!(Tier::Pro, resolve_tier(None, Some("#tier="), Tier::Pro));
    assert_eq!(Tier::Pro, resolve_tier(None, Some("#tier=gold"), Tier::Pro));
}

#[test]
fn absent_or_empty_input_keeps_previous_tier() {
    assert_eq!(Tier::Elite, resolve_tier(None, None, Tier::Elite));
    assert_eq!(Tier::Pro, resolve_tier(Some(""), Some(""), Tier::Pro));
    assert_eq!(Tier::Pro, resolve_tier(Some("?"), Some("#"), Tier::Pro));
}

#[test]
fn resolve_from_url() {
    assert_eq!(
        Tier::Elite,
        resolve_tier_from_url(&url("https://card.example.com/?tier=elite"), Tier::Starter)
    );
    assert_eq!(
        Tier::Pro,
        resolve_tier_from_url(&url("https://card.example.com/#?tier=pro"), Tier::Starter)
    );
    assert_eq!(
        Tier::Starter,
        resolve_tier_from_url(&url("https://card.example.com/"), Tier::Starter)
    );
}

#[test]
fn context_starts_from_url_or_default() {
    assert_eq!(Tier::Starter, TierContext::default().tier());
    assert_eq!(
        Tier::Pro,
        TierContext::from_url(Tier::Starter, &url("https://card.example.com/?tier=pro")).tier()
    );
    assert_eq!(
        Tier::Elite,
        TierContext::from_url(Tier::Elite, &url("https://card.example.com/?tier=gold")).tier()
    );
}

#[test]
fn context_reports_hash_changes() {
    let mut context = TierContext::default();
    let change = context.on_hash_change(&url("https://card.example.com/#elite"));
    assert_eq!(
        TierChange::Changed {
            from: Tier::Starter,
            to: Tier::Elite
        },
        change
    );
    assert!(change.is_changed());
    assert_eq!(Tier::Elite, context.tier());

    let change = context.on_hash_change(&url("https://card.example.com/#nonsense"));
    assert_eq!(TierChange::Unchanged(Tier::Elite), change);
    assert_eq!(Tier::Elite, change.current());

    // Removing the hash does not reset the tier.
    let change = context.on_hash_change(&url("https://card.example.com/"));
    assert!(!change.is_changed());
    assert_eq!(Tier::Elite, context.tier());
}

fn tier_strategy() -> impl Strategy<Value = Tier> {
    prop_oneof![Just(Tier::Starter), Just(Tier::Pro), Just(Tier::Elite)]
}

proptest! {
    #[test]
    fn unknown_names_keep_previous_tier(name in "[a-zA-Z0-9 ]{0,12}", previous in tier_strategy()) {
        prop_assume!(name.parse::<Tier>().is_err());
        let search = format!("tier={name}");
        prop_assert_eq!(previous, resolve_tier(Some(&search), None, previous));
        let hash = format!("#tier={name}");
        prop_assert_eq!(previous, resolve_tier(None, Some(&hash), previous));
        let hash = format!("#{name}");
        prop_assert_eq!(previous, resolve_tier(None, Some(&hash), previous));
    }

    #[test]
    fn known_names_win_regardless_of_previous(tier in tier_strategy(), previous in tier_strategy()) {
        let search = format!("tier={}", tier.as_str().to_uppercase());
        prop_assert_eq!(tier, resolve_tier(Some(&search), None, previous));
    }
}
