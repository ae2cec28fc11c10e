use isolang::Language;

use super::LanguageCode;

/// Human-readable English name for a language code, e.g. `fr` -> `French`.
///
/// Two- and three-letter codes are accepted. A region subtag is kept as a
/// parenthesised suffix (`zh-cn` -> `Chinese (CN)`). Anything that cannot be
/// resolved comes back as the raw code.
pub fn display_name(code: &LanguageCode) -> String {
    let raw = code.as_str();
    let mut subtags = raw.split(['-', '_']);
    let primary = subtags.next().unwrap_or_default().to_ascii_lowercase();

    let Some(language) = lookup(&primary) else {
        return raw.to_string();
    };

    match subtags.next().filter(|region| !region.is_empty()) {
        Some(region) => format!("{} ({})", language.to_name(), region.to_ascii_uppercase()),
        None => language.to_name().to_string(),
    }
}

fn lookup(primary: &str) -> Option<Language> {
    match primary.len() {
        2 => Language::from_639_1(primary),
        3 => Language::from_639_3(primary),
        _ => None,
    }
}
