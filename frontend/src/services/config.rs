use catalog_domain::{CatalogConfig, Locale};

/// Client settings for this build
///
/// `QUOTE_API_URL` set at compile time overrides the API root. The locale
/// follows the browser language.
pub fn app_config() -> CatalogConfig {
    let mut config = match option_env!("QUOTE_API_URL") {
        Some(url) => CatalogConfig::default().with_api_base_url(url),
        None => CatalogConfig::default(),
    };
    if let Some(tag) = gloo::utils::window().navigator().language() {
        config.locale = Locale::from_tag(&tag);
    }
    config
}
