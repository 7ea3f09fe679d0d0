//! URL-safe slug generation for slider names.
//!
//! Slugs are derived from the human-entered name: lowercase, diacritics
//! folded to ASCII, every run of non-alphanumeric characters collapsed to
//! a single hyphen, leading/trailing hyphens trimmed.

use crate::error::CoreError;

/// Generate a URL-safe slug from a display name.
///
/// # Examples
///
/// ```
/// use vernissage_core::slug::slugify;
///
/// assert_eq!(slugify("Café Días 2026!").unwrap(), "cafe-dias-2026");
/// assert_eq!(slugify("Hero  --  Slider").unwrap(), "hero-slider");
/// ```
///
/// Returns `CoreError::Validation` when nothing alphanumeric survives
/// normalization (e.g. a name of only punctuation).
pub fn slugify(name: &str) -> Result<String, CoreError> {
    fn push(c: char, slug: &mut String, pending: &mut bool) {
        if *pending && !slug.is_empty() {
            slug.push('-');
        }
        *pending = false;
        slug.push(c.to_ascii_lowercase());
    }

    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            push(ch, &mut slug, &mut pending_hyphen);
        } else if let Some(folded) = fold_diacritic(ch) {
            for c in folded.chars() {
                push(c, &mut slug, &mut pending_hyphen);
            }
        } else {
            // Punctuation, whitespace, and unmapped characters all act
            // as separators.
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        return Err(CoreError::Validation(
            "Name must contain at least one alphanumeric character".to_string(),
        ));
    }
    Ok(slug)
}

/// Fold an accented Latin character to its ASCII base form.
///
/// Covers the Latin-1 and Latin Extended-A ranges the site's locales
/// actually use. Returns `None` for characters outside the map.
fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "a",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' => "u",
        'ç' | 'ć' | 'č' | 'Ç' | 'Ć' | 'Č' => "c",
        'ñ' | 'ń' | 'ň' | 'Ñ' | 'Ń' | 'Ň' => "n",
        'ý' | 'ÿ' | 'Ý' => "y",
        'š' | 'ś' | 'Š' | 'Ś' => "s",
        'ž' | 'ź' | 'ż' | 'Ž' | 'Ź' | 'Ż' => "z",
        'ď' | 'đ' | 'ð' | 'Ď' | 'Đ' => "d",
        'ł' | 'Ł' => "l",
        'ř' | 'Ř' => "r",
        'ť' | 'Ť' => "t",
        'ğ' | 'Ğ' => "g",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use assert_matches::assert_matches;

    #[test]
    fn strips_diacritics_and_punctuation() {
        assert_eq!(slugify("Café Días 2026!").unwrap(), "cafe-dias-2026");
    }

    #[test]
    fn collapses_runs_to_single_hyphen() {
        assert_eq!(slugify("Hero  --  Slider").unwrap(), "hero-slider");
    }

    #[test]
    fn trims_leading_and_trailing_hyphens() {
        assert_eq!(
            slugify("  ...Artists & Stories...  ").unwrap(),
            "artists-stories"
        );
    }

    #[test]
    fn lowercases() {
        assert_eq!(slugify("OPENING Night").unwrap(), "opening-night");
    }

    #[test]
    fn uppercase_accents_fold_to_lowercase() {
        assert_eq!(slugify("ÉTÉ à Paris").unwrap(), "ete-a-paris");
    }

    #[test]
    fn german_sharp_s_expands() {
        assert_eq!(slugify("Straße 9").unwrap(), "strasse-9");
    }

    #[test]
    fn rejects_empty_after_normalization() {
        assert_matches!(slugify("!!! ---"), Err(CoreError::Validation(_)));
        assert_matches!(slugify(""), Err(CoreError::Validation(_)));
    }
}
