//! Identifier casing primitives.
//!
//! Generated identifiers must be reproducible byte for byte, so casing never
//! depends on the locale and never changes the length of a word.

/// Capitalizes every maximal run of alphabetic characters.
///
/// The first letter of a run is uppercased and the remaining ASCII letters
/// are lowercased. Non-ASCII letters belong to the run: a leading one is
/// uppercased only when that maps it to exactly one character, any later one
/// is copied unchanged. Every other character (digits, `_`, punctuation)
/// separates runs and is copied unchanged.
///
/// ```
/// use swmgen_codegen::naming::capitalize_words;
///
/// assert_eq!(capitalize_words("int64_t"), "Int64_T");
/// assert_eq!(capitalize_words("job_record"), "Job_Record");
/// assert_eq!(capitalize_words("über_job"), "Über_Job");
/// ```
#[must_use]
pub fn capitalize_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if !c.is_alphabetic() {
            result.push(c);
            in_word = false;
        } else if in_word {
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(word_initial(c));
            in_word = true;
        }
    }

    result
}

/// Uppercases the first letter of a run if it maps to a single character.
fn word_initial(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Capitalizes words and joins them by dropping `_` separators.
///
/// Used for record and entity class names (`job_record` -> `JobRecord`).
#[must_use]
pub fn pascal_words(s: &str) -> String {
    capitalize_words(s).replace('_', "")
}
