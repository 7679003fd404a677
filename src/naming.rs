//! Display labels derived from file and folder names.
//!
//! Flat categories have no summary file to take a title from, so the label
//! shown in the index comes from the filename stem:
//!
//! - `baseline-results.md` → "Baseline Results"
//! - `lr_sweep.md` → "Lr Sweep"
//! - `GPT-notes.md` → "Gpt Notes"
//!
//! Casing follows word boundaries: a letter is uppercased when it starts the
//! string or follows a non-letter, and lowercased otherwise. Digits and
//! punctuation count as boundaries, so `v2beta` becomes "V2Beta".

/// Characters treated as word separators in filename stems.
const SEPARATORS: &[char] = &['-', '_'];

/// Turn a filename stem into a human-readable label.
pub fn display_label(stem: &str) -> String {
    let spaced: String = stem
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();
    title_case(&spaced)
}

/// Title-case `text` on letter boundaries.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashes_become_spaces() {
        assert_eq!(display_label("baseline-results"), "Baseline Results");
    }

    #[test]
    fn underscores_become_spaces() {
        assert_eq!(display_label("lr_sweep"), "Lr Sweep");
    }

    #[test]
    fn uppercase_words_are_normalized() {
        assert_eq!(display_label("GPT-notes"), "Gpt Notes");
    }

    #[test]
    fn digits_are_word_boundaries() {
        assert_eq!(title_case("v2beta"), "V2Beta");
        assert_eq!(display_label("2024-plan"), "2024 Plan");
    }

    #[test]
    fn apostrophe_starts_new_word() {
        assert_eq!(title_case("what's next"), "What'S Next");
    }

    #[test]
    fn empty_stem() {
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn non_ascii_letters() {
        assert_eq!(display_label("über-modell"), "Über Modell");
    }
}
