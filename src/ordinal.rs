//! Spelled-out ordinal numbers.
//!
//! Edition statements given as bare numbers are cited in words
//! (`"2"` → `"second"`). The English rules follow the common
//! `spellout-ordinal` convention: compounds are hyphenated below one hundred
//! (`twenty-first`), scale words take no "and" (`one hundred first`), and
//! only the final word is made ordinal.

use crate::config::OrdinalLocale;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Powers of one thousand, smallest first.
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Spell `n` as an ordinal word in the given locale.
///
/// # Examples
///
/// ```
/// use iso690::config::OrdinalLocale;
/// use iso690::ordinal::spell_ordinal;
///
/// assert_eq!(spell_ordinal(2, OrdinalLocale::English), "second");
/// assert_eq!(spell_ordinal(21, OrdinalLocale::English), "twenty-first");
/// assert_eq!(spell_ordinal(100, OrdinalLocale::English), "one hundredth");
/// ```
#[must_use]
pub fn spell_ordinal(n: u64, locale: OrdinalLocale) -> String {
    match locale {
        OrdinalLocale::English => english_ordinal(n),
    }
}

/// Spell a string of ASCII digits as an ordinal.
///
/// Returns `None` when `digits` is empty, contains anything but ASCII digits,
/// or is too large to spell.
#[must_use]
pub fn spell_numeric_ordinal(digits: &str, locale: OrdinalLocale) -> Option<String> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok().map(|n| spell_ordinal(n, locale))
}

fn english_ordinal(n: u64) -> String {
    let cardinal = english_cardinal(n);
    // Only the last word changes; it follows either a space or a hyphen.
    let split = cardinal.rfind([' ', '-']).map_or(0, |i| i + 1);
    let (head, last) = cardinal.split_at(split);
    format!("{head}{}", ordinal_word(last))
}

fn ordinal_word(word: &str) -> String {
    match word {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{w}th"),
    }
}

fn english_cardinal(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    let mut scale = 0;
    while rest > 0 {
        let chunk = rest % 1000;
        if chunk > 0 {
            let words = below_thousand(chunk);
            if SCALES[scale].is_empty() {
                groups.push(words);
            } else {
                groups.push(format!("{words} {}", SCALES[scale]));
            }
        }
        rest /= 1000;
        scale += 1;
    }

    groups.reverse();
    groups.join(" ")
}

#[allow(clippy::cast_possible_truncation)]
fn below_thousand(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    let tail = match rest {
        0 => String::new(),
        r if r < 20 => ONES[r].to_string(),
        r if r % 10 == 0 => TENS[r / 10].to_string(),
        r => format!("{}-{}", TENS[r / 10], ONES[r % 10]),
    };

    match (hundreds, tail.is_empty()) {
        (0, _) => tail,
        (h, true) => format!("{} hundred", ONES[h]),
        (h, false) => format!("{} hundred {tail}", ONES[h]),
    }
}
