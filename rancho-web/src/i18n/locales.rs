use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_LANG: &str = "pt";

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "pt",
        name: "Português",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("pt", include_str!("../../i18n/pt.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

/// Parsed bundle for `lang`; unknown codes get the Portuguese bundle.
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

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) if !map.contains_key("other") => {
                for (k, v) in map {
                    leaf_keys(v, &format!("{prefix}{k}."), out);
                }
            }
            _ => out.push(prefix.trim_end_matches('.').to_string()),
        }
    }

    #[test]
    fn every_locale_has_the_same_keys() {
        let mut reference = Vec::new();
        leaf_keys(&load_translations("pt").unwrap(), "", &mut reference);
        reference.sort();
        for meta in locales() {
            let mut keys = Vec::new();
            leaf_keys(&load_translations(meta.code).unwrap(), "", &mut keys);
            keys.sort();
            assert_eq!(keys, reference, "locale {}", meta.code);
        }
        assert!(is_supported("en"));
        assert!(!is_supported("xx"));
    }
}
