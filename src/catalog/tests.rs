//! Catalog loader tests
//!
//! Validation is partial-failure tolerant, so most of these exercise the
//! skip-and-continue paths alongside the two fatal conditions.

use super::*;
use serde_json::json;

fn entry(arabic: &str, en: &str, ur: &str, reference: &str) -> serde_json::Value {
    json!({
        "arabic": arabic,
        "translations": { "en": en, "ur": ur },
        "reference": reference,
    })
}

#[test]
fn test_normalize_assigns_day_index_ids() {
    let raw = json!({
        "schema_version": "1",
        "days": {
            "monday": [
                entry("dua one", "first", "پہلی", "ref 1"),
                entry("dua two", "second", "دوسری", ""),
            ],
        }
    });

    let duas = normalize(&raw).unwrap();
    assert_eq!(duas.len(), 2);
    assert_eq!(duas[0].id, "monday-0");
    assert_eq!(duas[1].id, "monday-1");
    assert_eq!(duas[0].day, Weekday::Monday);
    assert_eq!(duas[1].reference, "");
}

#[test]
fn test_normalize_is_idempotent() {
    let raw = json!({
        "days": {
            "friday": [entry("a", "b", "c", "d")],
            "sunday": [entry("e", "f", "g", "h")],
        }
    });

    let first = normalize(&raw).unwrap();
    let second = normalize(&raw).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_normalize_fixed_day_order() {
    // JSON object order differs from display order; output must follow
    // the fixed friday..thursday traversal regardless
    let raw = json!({
        "days": {
            "thursday": [entry("t", "t", "t", "")],
            "friday": [entry("f", "f", "f", "")],
        }
    });

    let duas = normalize(&raw).unwrap();
    assert_eq!(duas[0].day, Weekday::Friday);
    assert_eq!(duas[1].day, Weekday::Thursday);
}

#[test]
fn test_corrupt_entry_skipped_rest_survive() {
    let mut entries: Vec<serde_json::Value> = (0..5)
        .map(|i| entry(&format!("arabic {i}"), "en", "ur", ""))
        .collect();
    // Missing `arabic` makes entry 2 invalid
    entries[2] = json!({
        "translations": { "en": "en", "ur": "ur" },
        "reference": "",
    });

    let raw = json!({ "days": { "tuesday": entries } });
    let duas = normalize(&raw).unwrap();

    assert_eq!(duas.len(), 4);
    // Ids keep the source array positions, so the gap is visible
    let ids: Vec<&str> = duas.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["tuesday-0", "tuesday-1", "tuesday-3", "tuesday-4"]);
}

#[test]
fn test_empty_required_text_is_invalid() {
    let raw = json!({
        "days": {
            "monday": [
                entry("", "en", "ur", ""),
                entry("ok", "en", "ur", ""),
            ],
        }
    });

    let duas = normalize(&raw).unwrap();
    assert_eq!(duas.len(), 1);
    assert_eq!(duas[0].arabic, "ok");
}

#[test]
fn test_missing_days_is_malformed() {
    let raw = json!({ "schema_version": "1" });
    assert!(matches!(normalize(&raw), Err(CatalogError::Malformed)));
}

#[test]
fn test_all_entries_invalid_is_empty() {
    let raw = json!({
        "days": {
            "monday": [json!({ "arabic": "only arabic" })],
        }
    });
    assert!(matches!(normalize(&raw), Err(CatalogError::Empty)));
}

#[test]
fn test_unknown_day_key_skipped() {
    let raw = json!({
        "days": {
            "funday": [entry("a", "b", "c", "")],
            "monday": [entry("d", "e", "f", "")],
        }
    });

    let duas = normalize(&raw).unwrap();
    assert_eq!(duas.len(), 1);
    assert_eq!(duas[0].day, Weekday::Monday);
}

#[test]
fn test_bundled_data_is_valid() {
    let duas = normalize_str(BUNDLED_DATA).unwrap();
    assert!(!duas.is_empty());
    // Every day of the week should have at least one dua
    for day in Weekday::ALL {
        assert!(
            duas.iter().any(|d| d.day == day),
            "no duas for {}",
            day.as_str()
        );
    }
}

#[test]
fn test_translation_fallback_order() {
    let t = Translations {
        en: Some("english".into()),
        ur: Some("urdu".into()),
        rom_ur: Some("roman".into()),
        ar: None,
    };
    // Requested language wins when present
    assert_eq!(t.get(Language::Urdu), "urdu");
    // Absent requested language falls back to English
    assert_eq!(t.get(Language::Arabic), "english");

    let only_ur = Translations {
        ur: Some("urdu".into()),
        ..Default::default()
    };
    assert_eq!(only_ur.get(Language::English), "urdu");

    let none = Translations::default();
    assert_eq!(none.get(Language::English), "");
}

#[test]
fn test_direction_is_pure_mapping() {
    assert_eq!(direction(Language::Arabic), TextDirection::Rtl);
    assert_eq!(direction(Language::Urdu), TextDirection::Rtl);
    assert_eq!(direction(Language::English), TextDirection::Ltr);
    assert_eq!(direction(Language::RomanUrdu), TextDirection::Ltr);
}

#[test]
fn test_duas_for_day_filters() {
    let raw = json!({
        "days": {
            "monday": [entry("m", "m", "m", "")],
            "friday": [entry("f1", "f", "f", ""), entry("f2", "f", "f", "")],
        }
    });
    let duas = normalize(&raw).unwrap();

    let friday = duas_for_day(&duas, Weekday::Friday);
    assert_eq!(friday.len(), 2);
    assert!(friday.iter().all(|d| d.day == Weekday::Friday));

    assert!(duas_for_day(&duas, Weekday::Saturday).is_empty());
}

#[test]
fn test_find_by_id() {
    let raw = json!({
        "days": { "monday": [entry("m", "m", "m", "")] }
    });
    let duas = normalize(&raw).unwrap();
    assert!(find_by_id(&duas, "monday-0").is_some());
    assert!(find_by_id(&duas, "monday-7").is_none());
}
