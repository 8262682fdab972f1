/// Derives a URL slug from a boat name.
///
/// Lowercases the input, folds French accented characters to their ASCII
/// base letter, collapses every other non-alphanumeric run into a single
/// dash and trims leading/trailing dashes.
///
/// # Arguments
/// - `text` - The display name to slugify
///
/// # Returns
/// - `String` - The slug, possibly empty if the input had no usable characters
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true; // suppress a leading dash

    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if let Some(folded) = fold_accent(c) {
            slug.push_str(folded);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Maps one accented character to its ASCII base form.
fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'â' | 'ä' | 'á' | 'ã' => "a",
        'ç' => "c",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'î' | 'ï' | 'í' => "i",
        'ô' | 'ö' | 'ó' | 'õ' => "o",
        'ù' | 'û' | 'ü' | 'ú' => "u",
        'ÿ' => "y",
        'ñ' => "n",
        'æ' => "ae",
        'œ' => "oe",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::generate_slug;

    #[test]
    fn lowercases_and_dashes() {
        assert_eq!(generate_slug("Perle Noire"), "perle-noire");
    }

    #[test]
    fn folds_accents() {
        assert_eq!(generate_slug("Étoile du Sud"), "etoile-du-sud");
    }

    #[test]
    fn collapses_symbol_runs() {
        assert_eq!(generate_slug("Le  Grand -- Large !"), "le-grand-large");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(generate_slug("!!!"), "");
    }
}
