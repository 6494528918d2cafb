use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "tr",
        name: "Türkçe",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("tr", include_str!("../../i18n/tr.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(prefix: &str, value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) if !map.contains_key("_") => {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(&key, v, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn every_locale_parses_and_matches_english_keys() {
        let mut english = Vec::new();
        leaf_keys("", &load_translations("en").unwrap(), &mut english);
        english.sort();
        for meta in locales() {
            let mut keys = Vec::new();
            leaf_keys("", &load_translations(meta.code).unwrap(), &mut keys);
            keys.sort();
            assert_eq!(keys, english, "locale {} drifted from en", meta.code);
        }
    }

    #[test]
    fn unknown_locale_is_not_supported() {
        assert!(is_supported("tr"));
        assert!(!is_supported("xx"));
    }
}
