use std::cmp::Ordering;

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::config;

const FALLBACK_CODE: &str = "N/A";
const FALLBACK_LABEL: &str = "Unknown Country";

/// One entry of the country picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryOption {
    /// ISO 3166-1 alpha-2 region code.
    pub value: String,
    /// Common English name, shown to the user.
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct RawCountry {
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub name: Option<RawCountryName>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct RawCountryName {
    #[serde(default)]
    pub common: Option<String>,
}

#[derive(Debug, Error)]
pub enum CountryLoadError {
    #[error("country directory request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("country directory answered with status {0}")]
    Status(u16),
}

pub fn to_option(raw: RawCountry) -> CountryOption {
    let value = raw
        .cca2
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| FALLBACK_CODE.to_string());
    let label = raw
        .name
        .and_then(|name| name.common)
        .filter(|common| !common.is_empty())
        .unwrap_or_else(|| FALLBACK_LABEL.to_string());

    CountryOption { value, label }
}

/// Maps directory records to picker options, sorted by label.
pub fn build_options(raws: Vec<RawCountry>) -> Vec<CountryOption> {
    let mut options: Vec<CountryOption> = raws.into_iter().map(to_option).collect();
    options.sort_by(|a, b| compare_labels(&a.label, &b.label));
    options
}

#[cfg(target_arch = "wasm32")]
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new())
        .cmp(&0)
}

// Off-browser there is no Intl collator; accent- and case-insensitive order
// with a byte-order tiebreak keeps the sort total.
#[cfg(not(target_arch = "wasm32"))]
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    unicase::UniCase::new(strip_accents(a))
        .cmp(&unicase::UniCase::new(strip_accents(b)))
        .then_with(|| a.cmp(b))
}

/// Decomposes and drops combining marks, so "Åland" becomes "Aland".
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Typeahead match: the query, with accents and case ignored, must occur
/// somewhere in "{label} {value}". Input order is kept.
pub fn filter_options<'a>(options: &'a [CountryOption], query: &str) -> Vec<&'a CountryOption> {
    let needle = strip_accents(query.trim()).to_lowercase();
    if needle.is_empty() {
        return options.iter().collect();
    }
    options
        .iter()
        .filter(|option| {
            let haystack = format!("{} {}", option.label, option.value);
            strip_accents(&haystack).to_lowercase().contains(&needle)
        })
        .collect()
}

pub async fn fetch_countries() -> Result<Vec<CountryOption>, CountryLoadError> {
    let response = Request::get(config::get_country_directory_url())
        .send()
        .await?;

    if !response.ok() {
        return Err(CountryLoadError::Status(response.status()));
    }

    let raws = response.json::<Vec<RawCountry>>().await?;
    log::info!("Loaded {} countries", raws.len());
    Ok(build_options(raws))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: Option<&str>, common: Option<&str>) -> RawCountry {
        RawCountry {
            cca2: code.map(str::to_string),
            name: Some(RawCountryName {
                common: common.map(str::to_string),
            }),
        }
    }

    fn is_sorted(options: &[CountryOption]) -> bool {
        options
            .windows(2)
            .all(|pair| compare_labels(&pair[0].label, &pair[1].label) != Ordering::Greater)
    }

    #[test]
    fn complete_record_keeps_code_and_name() {
        let option = to_option(raw(Some("ID"), Some("Indonesia")));
        assert_eq!(option.value, "ID");
        assert_eq!(option.label, "Indonesia");
    }

    #[test]
    fn missing_code_falls_back() {
        let option = to_option(raw(None, Some("Kosovo")));
        assert_eq!(option.value, "N/A");
        assert_eq!(option.label, "Kosovo");
    }

    #[test]
    fn missing_name_falls_back() {
        assert_eq!(to_option(raw(Some("XX"), None)).label, "Unknown Country");

        let nameless = RawCountry {
            cca2: Some("YY".to_string()),
            name: None,
        };
        let option = to_option(nameless);
        assert_eq!(option.value, "YY");
        assert_eq!(option.label, "Unknown Country");
    }

    #[test]
    fn decodes_directory_payload_and_ignores_extra_fields() {
        let payload = r#"[
            {"cca2": "NL", "name": {"common": "Netherlands", "official": "Kingdom of the Netherlands"}},
            {"name": {"common": "Nowhere"}},
            {"cca2": "AX", "name": {}},
            {}
        ]"#;
        let raws: Vec<RawCountry> = serde_json::from_str(payload).unwrap();
        let options: Vec<CountryOption> = raws.into_iter().map(to_option).collect();

        assert_eq!(options[0], CountryOption { value: "NL".into(), label: "Netherlands".into() });
        assert_eq!(options[1].value, "N/A");
        assert_eq!(options[2].label, "Unknown Country");
        assert_eq!(options[3], CountryOption { value: "N/A".into(), label: "Unknown Country".into() });
    }

    #[test]
    fn options_are_sorted_by_label_for_any_input_order() {
        let input = vec![
            raw(Some("ZA"), Some("South Africa")),
            raw(Some("AF"), Some("Afghanistan")),
            raw(Some("in"), Some("india")),
            raw(Some("ID"), Some("Indonesia")),
            raw(None, None),
            raw(Some("BR"), Some("Brazil")),
        ];
        let mut reversed = input.clone();
        reversed.reverse();

        let forward = build_options(input);
        let backward = build_options(reversed);

        assert!(is_sorted(&forward));
        assert!(is_sorted(&backward));
        assert_eq!(forward.first().unwrap().label, "Afghanistan");
        assert_eq!(forward.last().unwrap().label, "Unknown Country");
        // case-insensitive: "india" sits before "Indonesia"
        let labels: Vec<&str> = forward.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Afghanistan", "Brazil", "india", "Indonesia", "South Africa", "Unknown Country"]
        );
    }

    #[test]
    fn building_twice_is_deterministic() {
        let input = vec![
            raw(Some("CN"), Some("China")),
            raw(Some("BD"), Some("Bangladesh")),
            raw(Some("PK"), Some("Pakistan")),
            raw(None, Some("China")),
        ];
        assert_eq!(build_options(input.clone()), build_options(input));
    }

    #[test]
    fn filter_matches_label_substring_ignoring_case() {
        let options = build_options(vec![
            raw(Some("IN"), Some("India")),
            raw(Some("ID"), Some("Indonesia")),
            raw(Some("CN"), Some("China")),
        ]);

        assert_eq!(filter_options(&options, "").len(), 3);
        assert_eq!(filter_options(&options, "   ").len(), 3);

        let hits: Vec<&str> = filter_options(&options, "IND")
            .into_iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(hits, ["IN", "ID"]);

        assert!(filter_options(&options, "peru").is_empty());
    }

    #[test]
    fn filter_ignores_accents_and_matches_codes() {
        let options = build_options(vec![
            raw(Some("CI"), Some("Côte d'Ivoire")),
            raw(Some("AX"), Some("Åland Islands")),
            raw(Some("GB"), Some("United Kingdom")),
        ]);

        let first = |query: &str| -> Vec<&str> {
            filter_options(&options, query)
                .into_iter()
                .map(|o| o.value.as_str())
                .collect()
        };

        assert_eq!(first("cote"), ["CI"]);
        assert_eq!(first("aland"), ["AX"]);
        assert_eq!(first("ÅLAND"), ["AX"]);
        assert_eq!(first("gb"), ["GB"]);
        assert_eq!(first(" Kingdom GB "), ["GB"]);
    }

    #[test]
    fn accented_labels_sort_with_their_base_letter() {
        let labels: Vec<String> = build_options(vec![
            raw(Some("ZW"), Some("Zimbabwe")),
            raw(Some("AX"), Some("Åland Islands")),
            raw(Some("AF"), Some("Afghanistan")),
            raw(Some("CI"), Some("Côte d'Ivoire")),
            raw(Some("CO"), Some("Colombia")),
            raw(Some("CR"), Some("Costa Rica")),
        ])
        .into_iter()
        .map(|o| o.label)
        .collect();

        assert_eq!(
            labels,
            ["Afghanistan", "Åland Islands", "Colombia", "Costa Rica", "Côte d'Ivoire", "Zimbabwe"]
        );
    }

    #[test]
    fn accent_only_difference_still_orders_deterministically() {
        assert_eq!(compare_labels("Aland", "Åland"), Ordering::Less);
        assert_eq!(compare_labels("Åland", "Aland"), Ordering::Greater);
        assert_eq!(compare_labels("Åland", "Åland"), Ordering::Equal);
    }
}
