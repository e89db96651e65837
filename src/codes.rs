//! Naming and coding helpers behind every generated variant and SKU string.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::models::{ItemUnit, Variant};

/// Generated slugs are capped at this length.
const MAX_SLUG_LEN: usize = 64;

/// Separator between option values in display names.
pub const DISPLAY_SEPARATOR: &str = " \u{2013} ";

static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-z0-9]+").unwrap());

/// Fold precomposed Latin letters carrying diacritics down to their base
/// ASCII letter and drop standalone combining marks.
///
/// Letters without a diacritic decomposition (æ, ø, ß, ł, …) pass through
/// untouched and later collapse into a hyphen with the rest of the
/// non-alphanumerics.
fn fold_diacritics(input: &str) -> Cow<'_, str> {
    if input.is_ascii() {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match fold_char(ch) {
            Folded::Base(base) => out.push(base),
            Folded::CombiningMark => {}
            Folded::Keep => out.push(ch),
        }
    }
    Cow::Owned(out)
}

enum Folded {
    Base(char),
    CombiningMark,
    Keep,
}

fn fold_char(ch: char) -> Folded {
    let base = match ch {
        '\u{0300}'..='\u{036f}' => return Folded::CombiningMark,
        'À'..='Å' => 'A',
        'à'..='å' => 'a',
        'Ç' => 'C',
        'ç' => 'c',
        'È'..='Ë' => 'E',
        'è'..='ë' => 'e',
        'Ì'..='Ï' => 'I',
        'ì'..='ï' => 'i',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ò'..='Ö' => 'O',
        'ò'..='ö' => 'o',
        'Ù'..='Ü' => 'U',
        'ù'..='ü' => 'u',
        'Ý' => 'Y',
        'ý' | 'ÿ' => 'y',
        'Ā' | 'Ă' | 'Ą' => 'A',
        'ā' | 'ă' | 'ą' => 'a',
        'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'Ď' => 'D',
        'ď' => 'd',
        'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'Ĥ' => 'H',
        'ĥ' => 'h',
        'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'ĩ' | 'ī' | 'ĭ' | 'į' => 'i',
        'Ĵ' => 'J',
        'ĵ' => 'j',
        'Ķ' => 'K',
        'ķ' => 'k',
        'Ĺ' | 'Ļ' | 'Ľ' => 'L',
        'ĺ' | 'ļ' | 'ľ' => 'l',
        'Ń' | 'Ņ' | 'Ň' => 'N',
        'ń' | 'ņ' | 'ň' => 'n',
        'Ō' | 'Ŏ' | 'Ő' => 'O',
        'ō' | 'ŏ' | 'ő' => 'o',
        'Ŕ' | 'Ŗ' | 'Ř' => 'R',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => 'S',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => 's',
        'Ţ' | 'Ť' => 'T',
        'ţ' | 'ť' => 't',
        'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'Ŵ' => 'W',
        'ŵ' => 'w',
        'Ŷ' | 'Ÿ' => 'Y',
        'ŷ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return Folded::Keep,
    };
    Folded::Base(base)
}

/// Normalize free text into a lowercase ASCII slug.
///
/// Diacritics fold to base letters, runs of anything outside `[a-z0-9]`
/// collapse to a single hyphen, edge hyphens are trimmed, and the result is
/// capped at 64 characters.
pub fn slugify(input: &str) -> String {
    let folded = fold_diacritics(input);
    let lowered = folded.trim().to_lowercase();
    let collapsed = NON_ALNUM_RE.replace_all(&lowered, "-");
    // pure ASCII from here on, so the byte cap is a char cap
    let mut slug = collapsed.trim_matches('-').to_string();
    slug.truncate(MAX_SLUG_LEN);
    slug
}

/// Option values joined for display, de-slugged (`dark-roast` reads
/// `dark roast`).
pub fn variant_label(variant: &Variant) -> String {
    variant
        .options
        .iter()
        .map(|opt| opt.value.replace('-', " "))
        .collect::<Vec<_>>()
        .join(DISPLAY_SEPARATOR)
}

/// Human-readable SKU name: item name, variant values, unit code in parens.
/// Falls back to `-` when every part is empty.
pub fn sku_display_name(
    item_name: &str,
    variant: Option<&Variant>,
    unit: Option<&ItemUnit>,
) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !item_name.is_empty() {
        parts.push(item_name.trim().to_string());
    }
    if let Some(variant) = variant {
        if !variant.options.is_empty() {
            parts.push(variant_label(variant));
        }
    }
    if let Some(unit) = unit {
        let code = unit.unit_code();
        if !code.is_empty() {
            parts.push(format!("({})", code));
        }
    }
    let joined = parts.join(" ");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Machine-readable SKU code: hyphen-joined slugs of item name, option
/// values, and unit code, upper-cased. Empty segments drop out.
pub fn sku_code(item_name: &str, variant: Option<&Variant>, unit: Option<&ItemUnit>) -> String {
    let base = slugify(item_name);
    let variant_part = variant
        .map(|v| {
            v.options
                .iter()
                .map(|opt| slugify(&opt.value))
                .collect::<Vec<_>>()
                .join("-")
        })
        .unwrap_or_default();
    let unit_part = unit.map(|u| slugify(u.unit_code())).unwrap_or_default();

    [base, variant_part, unit_part]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("-")
        .to_uppercase()
}
