use serde::{Deserialize, Serialize};

/// Display language of the client
///
/// Polish is the default locale; several display rules (for example the
/// omitted AD suffix) depend on whether the default locale is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pl,
    En,
}

impl Locale {
    /// Resolve a language tag such as `en-US` or `pl`; unknown tags fall back to the default
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
        match primary.as_str() {
            "en" => Locale::En,
            _ => Locale::Pl,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::default()
    }

    /// Word prepended to approximate dates
    pub fn approx_token(&self) -> &'static str {
        match self {
            Locale::Pl => "około",
            Locale::En => "c.",
        }
    }

    pub fn bc_token(&self) -> &'static str {
        match self {
            Locale::Pl => "p. n. e.",
            Locale::En => "BC",
        }
    }

    /// AD suffix; empty for the default locale
    pub fn ad_token(&self) -> &'static str {
        match self {
            Locale::Pl => "",
            Locale::En => "AD",
        }
    }

    /// Unit written after a century numeral
    pub fn century_token(&self) -> &'static str {
        match self {
            Locale::Pl => "w.",
            Locale::En => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("en-GB"), Locale::En);
        assert_eq!(Locale::from_tag("EN_us"), Locale::En);
        assert_eq!(Locale::from_tag("pl-PL"), Locale::Pl);
        assert_eq!(Locale::from_tag("de"), Locale::Pl);
        assert_eq!(Locale::from_tag(""), Locale::Pl);
    }

    #[test]
    fn test_default_locale_omits_ad() {
        assert!(Locale::Pl.is_default());
        assert_eq!(Locale::Pl.ad_token(), "");
        assert_eq!(Locale::En.ad_token(), "AD");
    }
}
