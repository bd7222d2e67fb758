//! Best-effort cleanup of model-generated body text.
//!
//! The upstream model occasionally emits run-together words, stray
//! "undefined" tokens, and curly apostrophes. Sanitation repairs spacing
//! without altering words, and applies to scene body text only; titles and
//! choice labels pass through untouched.

use regex::Regex;

/// Compiled cleanup passes for generated narrative text.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    undefined: Regex,
    camel_boundary: Regex,
    curly_apostrophe: Regex,
    whitespace: Regex,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    /// Compile the cleanup patterns.
    pub fn new() -> Self {
        let undefined = Regex::new(r"(?i)undefined").expect("Valid undefined regex");
        let camel_boundary = Regex::new(r"([a-z])([A-Z])").expect("Valid camel boundary regex");
        let curly_apostrophe =
            Regex::new(r"([A-Za-z])\u{2019}([A-Za-z])").expect("Valid apostrophe regex");
        let whitespace = Regex::new(r"\s+").expect("Valid whitespace regex");

        Self {
            undefined,
            camel_boundary,
            curly_apostrophe,
            whitespace,
        }
    }

    /// Clean one block of generated body text.
    ///
    /// Passes run in the upstream service's order: strip literal
    /// "undefined" anywhere (case-insensitive), split lowercase→uppercase
    /// run-togethers, normalize curly apostrophes between letters, collapse
    /// whitespace runs, trim.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyloom_models::Sanitizer;
    ///
    /// let sanitizer = Sanitizer::new();
    /// assert_eq!(
    ///     sanitizer.clean("TheyWalked...undefined here"),
    ///     "They Walked... here"
    /// );
    /// ```
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = self.undefined.replace_all(text, "");
        let text = self.camel_boundary.replace_all(&text, "$1 $2");
        let text = self.curly_apostrophe.replace_all(&text, "$1'$2");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case_boundaries() {
        let sanitizer = Sanitizer::new();
        assert_eq!(sanitizer.clean("TheDoorSlams shut"), "The Door Slams shut");
    }

    #[test]
    fn strips_undefined_case_insensitively() {
        let sanitizer = Sanitizer::new();
        assert_eq!(sanitizer.clean("The Undefined path undefined ends"), "The path ends");
    }

    #[test]
    fn normalizes_curly_apostrophes_between_letters() {
        let sanitizer = Sanitizer::new();
        assert_eq!(sanitizer.clean("It\u{2019}s over"), "It's over");
        // Quote-mark usage at a word edge is left alone.
        assert_eq!(sanitizer.clean("he said \u{2019}go"), "he said \u{2019}go");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        let sanitizer = Sanitizer::new();
        assert_eq!(sanitizer.clean("  a   lonely\n\nkeeper  "), "a lonely keeper");
    }

    #[test]
    fn combined_passes_clean_run_together_text() {
        let sanitizer = Sanitizer::new();
        assert_eq!(
            sanitizer.clean("TheyWalked...undefined here"),
            "They Walked... here"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        let sanitizer = Sanitizer::new();
        assert_eq!(sanitizer.clean(""), "");
    }
}
