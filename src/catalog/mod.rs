// Catalog module - the bundled dua dataset
//
// Loads a nested JSON document ({schema_version, days: {<weekday>: [entries]}})
// into a flat, validated list of Dua records. Validation is partial-failure
// tolerant: a malformed entry is skipped and logged while the rest of its day
// and the catalog continue. Only two conditions are fatal to the reading
// feature: a missing `days` object, and zero valid entries after filtering.
//
// The normalized list is cached for the process lifetime; the catalog is
// read-only once loaded.

use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// The dataset compiled into the binary. Used when no override path is
/// configured, so the app works with zero setup.
const BUNDLED_DATA: &str = include_str!("../../assets/duas.json");

// ─────────────────────────────────────────────────────────────────────────────
// Core types
// ─────────────────────────────────────────────────────────────────────────────

/// Day of the week, matching the lowercase keys in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Friday,
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    /// All days in display order (the week opens on Friday).
    ///
    /// This order also fixes the traversal order during normalization, which
    /// makes repeated loads of the same input byte-for-byte identical.
    pub const ALL: [Weekday; 7] = [
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    /// The lowercase key used in the data file and in synthetic ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
        }
    }

    /// Capitalized name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
        }
    }

    pub fn from_str(s: &str) -> Option<Weekday> {
        Weekday::ALL.iter().copied().find(|d| d.as_str() == s)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// Today's weekday in local time.
pub fn today_weekday() -> Weekday {
    use chrono::Datelike;
    chrono::Local::now().weekday().into()
}

/// Translation language, matching the keys in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Urdu,
    RomanUrdu,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Urdu,
        Language::RomanUrdu,
        Language::Arabic,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
            Language::RomanUrdu => "rom-ur",
            Language::Arabic => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "Urdu",
            Language::RomanUrdu => "Roman Urdu",
            Language::Arabic => "Arabic",
        }
    }
}

/// Horizontal text direction, derived from the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Layout direction for a language. Pure and stateless: consumed by the
/// gesture interpreter (swipe mirroring) and by card alignment.
pub fn direction(language: Language) -> TextDirection {
    match language {
        Language::Arabic | Language::Urdu => TextDirection::Rtl,
        Language::English | Language::RomanUrdu => TextDirection::Ltr,
    }
}

/// Translations available for one dua. `en` and `ur` are required by
/// validation; the others are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translations {
    pub en: Option<String>,
    pub ur: Option<String>,
    pub rom_ur: Option<String>,
    pub ar: Option<String>,
}

impl Translations {
    /// Translation for the requested language, with fallback in priority
    /// order: requested -> English -> Urdu -> Roman Urdu -> empty.
    pub fn get(&self, language: Language) -> &str {
        let requested = match language {
            Language::English => &self.en,
            Language::Urdu => &self.ur,
            Language::RomanUrdu => &self.rom_ur,
            Language::Arabic => &self.ar,
        };
        requested
            .as_deref()
            .or(self.en.as_deref())
            .or(self.ur.as_deref())
            .or(self.rom_ur.as_deref())
            .unwrap_or("")
    }

    /// Whether a non-blank translation exists for a language (no fallback).
    pub fn has(&self, language: Language) -> bool {
        let value = match language {
            Language::English => &self.en,
            Language::Urdu => &self.ur,
            Language::RomanUrdu => &self.rom_ur,
            Language::Arabic => &self.ar,
        };
        value.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

/// One normalized catalog record. Immutable after load.
///
/// `id` is synthetic: `"<day>-<index>"` where `index` is the position within
/// the day's array in the source file. Favorites reference these ids, so the
/// source array order is load-bearing across app versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dua {
    pub id: String,
    pub day: Weekday,
    pub arabic: String,
    pub translations: Translations,
    pub reference: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Top-level structure is unusable (missing or non-object `days`).
    #[error("catalog is malformed: missing `days` object")]
    Malformed,

    /// Every entry failed validation; the app has nothing to show.
    #[error("catalog contains no valid duas after validation")]
    Empty,

    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse data file: {0}")]
    Json(#[from] serde_json::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw deserialization layer
// ─────────────────────────────────────────────────────────────────────────────

// Entries are deserialized individually from `serde_json::Value` so one bad
// entry cannot fail the whole day. Required fields missing or mistyped make
// the entry invalid; `rom-ur` and `ar` stay optional.
#[derive(Debug, Deserialize)]
struct RawDua {
    arabic: String,
    translations: RawTranslations,
    reference: String,
}

#[derive(Debug, Deserialize)]
struct RawTranslations {
    en: String,
    ur: String,
    #[serde(rename = "rom-ur")]
    rom_ur: Option<String>,
    ar: Option<String>,
}

impl RawDua {
    /// Semantic checks serde cannot express: required text must be non-empty.
    /// `reference` may be empty but must be present.
    fn is_valid(&self) -> bool {
        !self.arabic.is_empty()
            && !self.translations.en.is_empty()
            && !self.translations.ur.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalization
// ─────────────────────────────────────────────────────────────────────────────

/// Normalize a raw JSON document into a flat validated list.
///
/// Deterministic: days traverse in `Weekday::ALL` order, entries in array
/// order, so identical input always yields identical output (ids included).
pub fn normalize(raw: &serde_json::Value) -> Result<Vec<Dua>, CatalogError> {
    let days = raw
        .get("days")
        .and_then(|v| v.as_object())
        .ok_or(CatalogError::Malformed)?;

    // Unknown day keys are data bugs worth surfacing, but not fatal
    for key in days.keys() {
        if Weekday::from_str(key).is_none() {
            tracing::warn!(day = %key, "skipping unrecognized day key in catalog");
        }
    }

    let mut duas = Vec::new();

    for day in Weekday::ALL {
        let Some(entries) = days.get(day.as_str()) else {
            continue;
        };
        let Some(entries) = entries.as_array() else {
            tracing::warn!(day = day.as_str(), "day value is not an array, skipping day");
            continue;
        };

        for (index, value) in entries.iter().enumerate() {
            match serde_json::from_value::<RawDua>(value.clone()) {
                Ok(raw_dua) if raw_dua.is_valid() => {
                    duas.push(Dua {
                        id: format!("{}-{}", day.as_str(), index),
                        day,
                        arabic: raw_dua.arabic,
                        translations: Translations {
                            en: Some(raw_dua.translations.en),
                            ur: Some(raw_dua.translations.ur),
                            rom_ur: raw_dua.translations.rom_ur,
                            ar: raw_dua.translations.ar,
                        },
                        reference: raw_dua.reference,
                    });
                }
                Ok(_) => {
                    tracing::warn!(
                        day = day.as_str(),
                        index,
                        "skipping dua with empty required text"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        day = day.as_str(),
                        index,
                        error = %e,
                        "skipping malformed dua entry"
                    );
                }
            }
        }
    }

    if duas.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(duas)
}

/// Parse and normalize a JSON document from a string.
pub fn normalize_str(data: &str) -> Result<Vec<Dua>, CatalogError> {
    let raw: serde_json::Value = serde_json::from_str(data)?;
    normalize(&raw)
}

// ─────────────────────────────────────────────────────────────────────────────
// Process-wide cache
// ─────────────────────────────────────────────────────────────────────────────

static CATALOG: OnceLock<Vec<Dua>> = OnceLock::new();

/// Load the catalog, caching the result for the process lifetime.
///
/// `data_file` overrides the bundled dataset when set. Failures degrade to an
/// empty catalog (the UI shows "no duas available") rather than propagating;
/// the error is logged for diagnosis.
pub fn load_catalog(data_file: Option<&Path>) -> &'static [Dua] {
    CATALOG.get_or_init(|| {
        let result = match data_file {
            Some(path) => std::fs::read_to_string(path)
                .map_err(CatalogError::from)
                .and_then(|data| normalize_str(&data)),
            None => normalize_str(BUNDLED_DATA),
        };

        match result {
            Ok(duas) => {
                tracing::info!(count = duas.len(), "catalog loaded");
                duas
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load catalog, continuing with empty list");
                Vec::new()
            }
        }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────────────

/// The subset of duas belonging to one weekday, in catalog order.
pub fn duas_for_day(catalog: &[Dua], day: Weekday) -> Vec<Dua> {
    catalog.iter().filter(|d| d.day == day).cloned().collect()
}

/// Today's day subset.
pub fn today_duas(catalog: &[Dua]) -> Vec<Dua> {
    duas_for_day(catalog, today_weekday())
}

/// Look up a dua by id (favorites resolution).
pub fn find_by_id<'a>(catalog: &'a [Dua], id: &str) -> Option<&'a Dua> {
    catalog.iter().find(|d| d.id == id)
}
