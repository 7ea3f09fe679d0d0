//! Locale codes for section content.

use crate::error::CoreError;

/// The locale served when no row exists for the requested one.
pub const DEFAULT_LOCALE: &str = "en";

/// Normalize and validate a locale code.
///
/// Accepts `xx` or `xx-YY` shapes (case-insensitive input, normalized to
/// lowercase language / uppercase region).
pub fn normalize(locale: &str) -> Result<String, CoreError> {
    let locale = locale.trim();
    let (lang, region) = match locale.split_once('-') {
        Some((lang, region)) => (lang, Some(region)),
        None => (locale, None),
    };

    let lang_ok = lang.len() == 2 && lang.chars().all(|c| c.is_ascii_alphabetic());
    let region_ok =
        region.map_or(true, |r| r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()));

    if !lang_ok || !region_ok {
        return Err(CoreError::Validation(format!(
            "Invalid locale '{locale}' (expected xx or xx-YY)"
        )));
    }

    match region {
        Some(r) => Ok(format!("{}-{}", lang.to_ascii_lowercase(), r.to_ascii_uppercase())),
        None => Ok(lang.to_ascii_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn normalizes_case() {
        assert_eq!(normalize("EN").unwrap(), "en");
        assert_eq!(normalize("pt-br").unwrap(), "pt-BR");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_matches!(normalize("english"), Err(CoreError::Validation(_)));
        assert_matches!(normalize("e"), Err(CoreError::Validation(_)));
        assert_matches!(normalize("en-GBR"), Err(CoreError::Validation(_)));
        assert_matches!(normalize(""), Err(CoreError::Validation(_)));
    }
}
