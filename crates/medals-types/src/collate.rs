use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::Country;

/// One collation element: the case-folded base letter plus the accent and
/// case bits that only matter when the base letters tie.
#[derive(Debug, Clone, Copy)]
struct Element {
    primary: char,
    accented: bool,
    upper: bool,
}

/// Latin letters with no canonical decomposition that still sort with a base letter.
fn fold_letter(c: char) -> Option<&'static str> {
    let folded = match c {
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ø' | 'Ø' => "o",
        'ł' | 'Ł' => "l",
        'đ' | 'Đ' | 'ð' | 'Ð' => "d",
        'ħ' | 'Ħ' => "h",
        'þ' | 'Þ' => "th",
        'ß' => "ss",
        'ı' => "i",
        _ => return None,
    };
    Some(folded)
}

fn elements(name: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(name.len());
    for c in name.nfkd() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.accented = true;
            }
            continue;
        }
        let upper = c.is_uppercase();
        match fold_letter(c) {
            Some(folded) => out.extend(folded.chars().map(|primary| Element {
                primary,
                accented: true,
                upper,
            })),
            None => out.extend(c.to_lowercase().map(|primary| Element {
                primary,
                accented: false,
                upper,
            })),
        }
    }
    out
}

/// Locale-aware name comparison.
///
/// Base letters decide first, so "Åland" sorts next to "Aland" and "Ørsted"
/// next to "Orsted" rather than after "Zimbabwe". On a tie, unaccented
/// sorts before accented, then lowercase before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (a_elems, b_elems) = (elements(a), elements(b));
    let primary = |elems: &[Element]| elems.iter().map(|e| e.primary).collect::<Vec<_>>();
    let accents = |elems: &[Element]| elems.iter().map(|e| e.accented).collect::<Vec<_>>();
    let cases = |elems: &[Element]| elems.iter().map(|e| e.upper).collect::<Vec<_>>();

    primary(&a_elems)
        .cmp(&primary(&b_elems))
        .then_with(|| accents(&a_elems).cmp(&accents(&b_elems)))
        .then_with(|| cases(&a_elems).cmp(&cases(&b_elems)))
        .then_with(|| a.cmp(b))
}

/// Borrowed view of `countries` ordered by name. The input order is left untouched.
pub fn sort_by_name(countries: &[Country]) -> Vec<&Country> {
    let mut sorted: Vec<&Country> = countries.iter().collect();
    sorted.sort_by(|a, b| compare_names(&a.name, &b.name));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_does_not_dominate_ordering() {
        let mut names = vec!["spain", "Brazil", "china"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["Brazil", "china", "spain"]);
    }

    #[test]
    fn test_diacritics_sort_with_base_letter() {
        let mut names = vec!["Zimbabwe", "Österreich", "Oman", "Côte d'Ivoire", "Cuba"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(
            names,
            vec!["Côte d'Ivoire", "Cuba", "Oman", "Österreich", "Zimbabwe"]
        );
    }

    #[test]
    fn test_ordering_matches_browser_locale_compare() {
        let mut names = vec![
            "Zambia",
            "Ørsted",
            "Oman",
            "brazil",
            "Brazil",
            "cote",
            "Côte",
            "Æsir",
            "Afghanistan",
            "Beta",
        ];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(
            names,
            vec![
                "Æsir",
                "Afghanistan",
                "Beta",
                "brazil",
                "Brazil",
                "cote",
                "Côte",
                "Oman",
                "Ørsted",
                "Zambia",
            ]
        );
    }

    #[test]
    fn test_unaccented_and_lowercase_win_ties() {
        assert_eq!(compare_names("cote", "Côte"), Ordering::Less);
        assert_eq!(compare_names("Cote", "côte"), Ordering::Less);
        assert_eq!(compare_names("brazil", "Brazil"), Ordering::Less);
        assert_eq!(compare_names("Łódź", "Lodz"), Ordering::Greater);
        assert_eq!(compare_names("Brazil", "Brazil"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_name_keeps_source_order() {
        let countries = vec![
            Country::new(1, "Italy"),
            Country::new(2, "Brazil"),
            Country::new(3, "Germany"),
        ];

        let sorted: Vec<&str> = sort_by_name(&countries)
            .iter()
            .map(|c| c.name.as_str())
            .collect();

        assert_eq!(sorted, vec!["Brazil", "Germany", "Italy"]);
        assert_eq!(countries[0].name, "Italy");
    }
}
