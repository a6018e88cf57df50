// English noun pluralization for seed-term expansion.
//
// Covers the cases that show up in news search phrases: irregular nouns,
// uninflected nouns, the Greek/Latin "-is" ending, sibilants (+es),
// consonant + y (-> ies), f/fe (-> ves) for the common words that take it,
// and the default +s. Multi-word phrases pluralize their last word.

const IRREGULAR: &[(&str, &str)] = &[
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
    ("ox", "oxen"),
    ("phenomenon", "phenomena"),
];

/// Irregular endings that carry into compounds: chairman, salesperson, grandchild.
const IRREGULAR_ENDINGS: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("person", "people"),
    ("tooth", "teeth"),
];

/// Words that end like an irregular noun but pluralize regularly.
const REGULAR_ENDINGS: &[&str] = &[
    "caiman", "german", "human", "mongoose", "ottoman", "roman", "shaman", "talisman",
];

const UNINFLECTED: &[&str] = &[
    "aircraft", "data", "deer", "equipment", "fish", "information", "news", "research",
    "series", "sheep", "software", "species", "staff",
];

const F_TO_VES: &[&str] = &[
    "calf", "half", "knife", "leaf", "life", "loaf", "self", "shelf", "thief", "wife", "wolf",
];

const O_TO_OES: &[&str] = &["echo", "hero", "potato", "tomato", "torpedo", "veto"];

/// Single-z words that double the z: quiz -> quizzes.
const DOUBLE_Z: &[&str] = &["fez", "quiz", "whiz"];

/// Plural form of `phrase`, pluralizing only its final word.
pub fn pluralize(phrase: &str) -> String {
    match phrase.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", pluralize_word(last)),
        None => pluralize_word(phrase),
    }
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }
    if !REGULAR_ENDINGS.contains(&lower.as_str()) {
        for (singular, plural) in IRREGULAR_ENDINGS {
            if !lower.ends_with(singular) {
                continue;
            }
            if let Some((head, ending)) = split_tail(word, singular.len()) {
                return format!("{head}{}", match_case(ending, plural));
            }
        }
    }
    if UNINFLECTED.contains(&lower.as_str()) {
        return word.to_string();
    }
    if F_TO_VES.contains(&lower.as_str()) {
        let cut = if lower.ends_with("fe") { 2 } else { 1 };
        if let Some((stem, _)) = split_tail(word, cut) {
            return format!("{stem}{}", suffix_case(word, "ves"));
        }
    }
    if DOUBLE_Z.contains(&lower.as_str()) {
        return format!("{word}{}", suffix_case(word, "zes"));
    }
    if O_TO_OES.contains(&lower.as_str()) {
        return format!("{word}es");
    }

    // analysis -> analyses, diagnosis -> diagnoses
    if lower.ends_with("sis") && lower.len() > 4 {
        return format!("{}es", &word[..word.len() - 2]);
    }

    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{word}es");
    }

    if lower.ends_with('y') {
        let before = lower.chars().rev().nth(1);
        if before.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
    }

    format!("{word}s")
}

/// Split off the last `n` bytes of `word`, if that lands on a char boundary.
fn split_tail(word: &str, n: usize) -> Option<(&str, &str)> {
    let at = word.len().checked_sub(n)?;
    word.is_char_boundary(at).then(|| word.split_at(at))
}

/// Suffixes that replace part of the stem follow an all-caps word's case.
fn suffix_case(word: &str, suffix: &str) -> String {
    if is_upper(word) {
        suffix.to_uppercase()
    } else {
        suffix.to_string()
    }
}

fn match_case(word: &str, plural: &str) -> String {
    if is_upper(word) {
        plural.to_uppercase()
    } else if word.chars().next().is_some_and(|c| c.is_uppercase()) {
        let mut chars = plural.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        plural.to_string()
    }
}

fn is_upper(word: &str) -> bool {
    word.len() > 1
        && word.chars().any(|c| c.is_alphabetic())
        && word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}
