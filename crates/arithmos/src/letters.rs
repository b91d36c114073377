//! Pythagorean letter values.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Fold an accented Latin letter to its base letter: canonical decomposition
/// with combining marks dropped. Letters whose stroke or bar is not a
/// combining mark are mapped explicitly.
pub fn fold_diacritic(c: char) -> char {
    match c {
        'ł' => 'l',
        'ø' => 'o',
        'đ' | 'ð' => 'd',
        'ı' => 'i',
        'ħ' => 'h',
        'ŧ' => 't',
        _ => std::iter::once(c)
            .nfd()
            .find(|d| !is_combining_mark(*d))
            .unwrap_or(c),
    }
}

/// A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8. `None` for anything that is not a letter.
pub fn letter_value(c: char) -> Option<u32> {
    let folded = c.to_lowercase().map(fold_diacritic).next()?;
    if folded.is_ascii_lowercase() {
        Some((folded as u32 - 'a' as u32) % 9 + 1)
    } else {
        None
    }
}

pub fn is_vowel(c: char) -> bool {
    c.to_lowercase()
        .map(fold_diacritic)
        .next()
        .is_some_and(|l| VOWELS.contains(&l))
}

/// Sum of all letter values in `name`; spaces and punctuation are ignored.
/// `None` when the name has no letters.
pub fn name_sum(name: &str) -> Option<u32> {
    let values: Vec<u32> = name.chars().filter_map(letter_value).collect();
    (!values.is_empty()).then(|| values.iter().sum())
}

pub fn vowel_sum(name: &str) -> Option<u32> {
    let values: Vec<u32> = name
        .chars()
        .filter(|c| is_vowel(*c))
        .filter_map(letter_value)
        .collect();
    (!values.is_empty()).then(|| values.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values() {
        assert_eq!(letter_value('A'), Some(1));
        assert_eq!(letter_value('i'), Some(9));
        assert_eq!(letter_value('j'), Some(1));
        assert_eq!(letter_value('s'), Some(1));
        assert_eq!(letter_value('z'), Some(8));
        assert_eq!(letter_value(' '), None);
        assert_eq!(letter_value('-'), None);
    }

    #[test]
    fn test_accents_fold() {
        assert_eq!(letter_value('á'), letter_value('a'));
        assert_eq!(letter_value('Ñ'), letter_value('n'));
        assert!(is_vowel('É'));
        assert!(!is_vowel('y'));
    }

    #[test]
    fn test_central_european_letters_fold() {
        assert_eq!(letter_value('ř'), Some(9));
        assert_eq!(letter_value('Ł'), Some(3));
        for (accented, base) in [
            ('š', 's'),
            ('ž', 'z'),
            ('ő', 'o'),
            ('č', 'c'),
            ('ś', 's'),
            ('ğ', 'g'),
            ('ů', 'u'),
            ('ø', 'o'),
        ] {
            assert_eq!(letter_value(accented), letter_value(base), "{accented}");
        }
        assert!(is_vowel('ő'));
        assert!(is_vowel('Ů'));
    }

    #[test]
    fn test_name_sum_ignores_carons() {
        assert_eq!(name_sum("Dvořák"), Some(26));
        assert_eq!(name_sum("Dvořák"), name_sum("Dvorak"));
        assert_eq!(name_sum("Łukasz Wiśniewski"), name_sum("Lukasz Wisniewski"));
    }

    #[test]
    fn test_name_sums() {
        assert_eq!(name_sum("Ana María López"), Some(60));
        assert_eq!(vowel_sum("Ana María López"), Some(24));
        assert_eq!(name_sum("  "), None);
        assert_eq!(vowel_sum("Brynn"), None);
    }
}
