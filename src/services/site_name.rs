//! Display name detection for newly added websites.

use url::Url;

use crate::errors::AppError;

/// Derive a display name from a store URL.
///
/// Takes the first hostname label (after dropping `www.`), splits it on
/// hyphens and capitalizes each word: `https://home-goods.example.com`
/// becomes `Home Goods`.
pub fn detect(raw_url: &str) -> Result<String, AppError> {
    let url = Url::parse(raw_url.trim())
        .map_err(|_| AppError::Validation("Invalid URL format".to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| AppError::Validation("URL has no host".to_string()))?;

    let domain = host.replacen("www.", "", 1);
    let label = domain.split('.').next().unwrap_or_default();

    Ok(label
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
