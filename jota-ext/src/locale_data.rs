//! Locale metadata tables
//!
//! A compact embedded database of language names/autonyms and region
//! metadata, keyed by ISO 639-1 language codes and ISO 3166-1 alpha-2 region
//! codes. Flag glyphs are not stored; they are derived from the region code
//! via Unicode regional indicator symbols.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Global locale registry
pub static LOCALES: LazyLock<LocaleRegistry> = LazyLock::new(LocaleRegistry::new);

#[derive(Debug, Clone, Copy)]
pub struct LanguageDef {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RegionDef {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
    /// International dialing prefix, without '+'
    pub phone: &'static str,
    pub continent: &'static str,
    pub capital: &'static str,
    pub currencies: &'static [&'static str],
    /// Principal spoken languages, ISO 639-1
    pub languages: &'static [&'static str],
}

/// Registry of all known languages and regions
pub struct LocaleRegistry {
    languages: HashMap<&'static str, &'static LanguageDef>,
    regions: HashMap<&'static str, &'static RegionDef>,
}

impl LocaleRegistry {
    fn new() -> Self {
        let mut registry = LocaleRegistry {
            languages: HashMap::new(),
            regions: HashMap::new(),
        };
        for lang in &LANGUAGES {
            registry.languages.insert(lang.code, lang);
        }
        for region in &REGIONS {
            registry.regions.insert(region.code, region);
        }
        registry
    }

    /// Look up a language by lowercase ISO 639-1 code
    pub fn language(&self, code: &str) -> Option<&'static LanguageDef> {
        self.languages.get(code).copied()
    }

    /// Look up a region by uppercase ISO 3166-1 alpha-2 code
    pub fn region(&self, code: &str) -> Option<&'static RegionDef> {
        self.regions.get(code).copied()
    }
}

/// Flag glyph for an uppercase alpha-2 region code (regional indicators)
pub fn flag(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_ascii_uppercase())
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}

static LANGUAGES: [LanguageDef; 26] = [
    LanguageDef { code: "ar", name: "Arabic", native: "العربية" },
    LanguageDef { code: "cs", name: "Czech", native: "Čeština" },
    LanguageDef { code: "da", name: "Danish", native: "Dansk" },
    LanguageDef { code: "de", name: "German", native: "Deutsch" },
    LanguageDef { code: "el", name: "Greek", native: "Ελληνικά" },
    LanguageDef { code: "en", name: "English", native: "English" },
    LanguageDef { code: "es", name: "Spanish", native: "Español" },
    LanguageDef { code: "fi", name: "Finnish", native: "Suomi" },
    LanguageDef { code: "fr", name: "French", native: "Français" },
    LanguageDef { code: "he", name: "Hebrew", native: "עברית" },
    LanguageDef { code: "hi", name: "Hindi", native: "हिन्दी" },
    LanguageDef { code: "hu", name: "Hungarian", native: "Magyar" },
    LanguageDef { code: "it", name: "Italian", native: "Italiano" },
    LanguageDef { code: "ja", name: "Japanese", native: "日本語" },
    LanguageDef { code: "ko", name: "Korean", native: "한국어" },
    LanguageDef { code: "nl", name: "Dutch", native: "Nederlands" },
    LanguageDef { code: "no", name: "Norwegian", native: "Norsk" },
    LanguageDef { code: "pl", name: "Polish", native: "Polski" },
    LanguageDef { code: "pt", name: "Portuguese", native: "Português" },
    LanguageDef { code: "ro", name: "Romanian", native: "Română" },
    LanguageDef { code: "ru", name: "Russian", native: "Русский" },
    LanguageDef { code: "sv", name: "Swedish", native: "Svenska" },
    LanguageDef { code: "th", name: "Thai", native: "ไทย" },
    LanguageDef { code: "tr", name: "Turkish", native: "Türkçe" },
    LanguageDef { code: "uk", name: "Ukrainian", native: "Українська" },
    LanguageDef { code: "zh", name: "Chinese", native: "中文" },
];

static REGIONS: [RegionDef; 18] = [
    RegionDef {
        code: "AR", name: "Argentina", native: "Argentina", phone: "54",
        continent: "South America", capital: "Buenos Aires",
        currencies: &["ARS"], languages: &["es"],
    },
    RegionDef {
        code: "AT", name: "Austria", native: "Österreich", phone: "43",
        continent: "Europe", capital: "Vienna",
        currencies: &["EUR"], languages: &["de"],
    },
    RegionDef {
        code: "AU", name: "Australia", native: "Australia", phone: "61",
        continent: "Oceania", capital: "Canberra",
        currencies: &["AUD"], languages: &["en"],
    },
    RegionDef {
        code: "BR", name: "Brazil", native: "Brasil", phone: "55",
        continent: "South America", capital: "Brasília",
        currencies: &["BRL"], languages: &["pt"],
    },
    RegionDef {
        code: "CA", name: "Canada", native: "Canada", phone: "1",
        continent: "North America", capital: "Ottawa",
        currencies: &["CAD"], languages: &["en", "fr"],
    },
    RegionDef {
        code: "CH", name: "Switzerland", native: "Schweiz", phone: "41",
        continent: "Europe", capital: "Bern",
        currencies: &["CHF"], languages: &["de", "fr", "it"],
    },
    RegionDef {
        code: "CN", name: "China", native: "中国", phone: "86",
        continent: "Asia", capital: "Beijing",
        currencies: &["CNY"], languages: &["zh"],
    },
    RegionDef {
        code: "DE", name: "Germany", native: "Deutschland", phone: "49",
        continent: "Europe", capital: "Berlin",
        currencies: &["EUR"], languages: &["de"],
    },
    RegionDef {
        code: "ES", name: "Spain", native: "España", phone: "34",
        continent: "Europe", capital: "Madrid",
        currencies: &["EUR"], languages: &["es"],
    },
    RegionDef {
        code: "FR", name: "France", native: "France", phone: "33",
        continent: "Europe", capital: "Paris",
        currencies: &["EUR"], languages: &["fr"],
    },
    RegionDef {
        code: "GB", name: "United Kingdom", native: "United Kingdom", phone: "44",
        continent: "Europe", capital: "London",
        currencies: &["GBP"], languages: &["en"],
    },
    RegionDef {
        code: "IT", name: "Italy", native: "Italia", phone: "39",
        continent: "Europe", capital: "Rome",
        currencies: &["EUR"], languages: &["it"],
    },
    RegionDef {
        code: "JP", name: "Japan", native: "日本", phone: "81",
        continent: "Asia", capital: "Tokyo",
        currencies: &["JPY"], languages: &["ja"],
    },
    RegionDef {
        code: "MX", name: "Mexico", native: "México", phone: "52",
        continent: "North America", capital: "Mexico City",
        currencies: &["MXN"], languages: &["es"],
    },
    RegionDef {
        code: "NL", name: "Netherlands", native: "Nederland", phone: "31",
        continent: "Europe", capital: "Amsterdam",
        currencies: &["EUR"], languages: &["nl"],
    },
    RegionDef {
        code: "PT", name: "Portugal", native: "Portugal", phone: "351",
        continent: "Europe", capital: "Lisbon",
        currencies: &["EUR"], languages: &["pt"],
    },
    RegionDef {
        code: "SE", name: "Sweden", native: "Sverige", phone: "46",
        continent: "Europe", capital: "Stockholm",
        currencies: &["SEK"], languages: &["sv"],
    },
    RegionDef {
        code: "US", name: "United States", native: "United States", phone: "1",
        continent: "North America", capital: "Washington, D.C.",
        currencies: &["USD"], languages: &["en"],
    },
];
