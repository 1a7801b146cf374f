//! Small text helpers shared across crates

/// Title-case a string: the first letter of every word upper-cased, the rest lower-cased.
///
/// A word starts at any letter that does not directly follow another letter,
/// so `"côte d'ivoire"` becomes `"Côte D'Ivoire"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_letter = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }

    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: title-casing ASCII text is idempotent
        #[test]
        fn test_title_case_idempotent(s in "[a-zA-Z ']{0,40}") {
            let once = title_case(&s);
            prop_assert_eq!(title_case(&once), once.clone());
        }

        /// Property: title-casing ASCII text only changes letter case
        #[test]
        fn test_title_case_preserves_letters(s in "[a-zA-Z ]{0,40}") {
            let cased = title_case(&s);
            prop_assert_eq!(cased.len(), s.len());
            prop_assert_eq!(cased.to_lowercase(), s.to_lowercase());
        }
    }
}
