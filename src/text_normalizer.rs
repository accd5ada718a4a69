use regex::Regex;

/// Cleans raw text extracted from listing pages before it is used for
/// skill extraction or similarity matching. Keeps German accented letters
/// and the handful of punctuation marks that carry meaning in job ads
/// (the € sign, "CI/CD"-style terms, hyphenated titles).
pub struct TextNormalizer {
    url_regex: Regex,
    email_regex: Regex,
    disallowed_regex: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        TextNormalizer {
            // scheme://rest-of-url, any scheme
            url_regex: Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S+").unwrap(),
            email_regex: Regex::new(r"\S+@\S+").unwrap(),
            disallowed_regex: Regex::new(r"[^A-Za-zÄÖÜäöüß\s/€.,\-]").unwrap(),
        }
    }

    /// Normalization order matters: URLs and emails are removed before the
    /// character filter so their punctuation does not leak fragments into
    /// the output. Duplicate lines are dropped (first occurrence wins) so
    /// that repeated boilerplate blocks on detail pages do not skew term
    /// frequencies. Idempotent.
    pub fn normalize(&self, raw: &str) -> String {
        let text = self.url_regex.replace_all(raw, " ");
        let text = self.email_regex.replace_all(&text, " ");
        let text = self.disallowed_regex.replace_all(&text, " ");
        let text = text.to_lowercase();

        let mut seen: Vec<String> = Vec::new();
        for line in text.split('\n') {
            let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
            if collapsed.is_empty() {
                continue;
            }
            if !seen.contains(&collapsed) {
                seen.push(collapsed);
            }
        }
        seen.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_urls_and_emails() {
        let n = TextNormalizer::new();
        let out = n.normalize("Bewerbung an jobs@firma.at oder https://firma.at/karriere heute");
        assert!(!out.contains('@'));
        assert!(!out.contains("http"));
        assert!(!out.contains("firma.at/karriere"));
        assert!(out.contains("bewerbung"));
        assert!(out.contains("heute"));
    }

    #[test]
    fn test_keeps_german_letters_and_allowed_punctuation() {
        let n = TextNormalizer::new();
        let out = n.normalize("Vergütung: in € für Data-Engineer (CI/CD)!");
        assert_eq!(out, "vergütung in € für data-engineer ci/cd");
    }

    #[test]
    fn test_digits_are_not_part_of_the_allow_list() {
        let n = TextNormalizer::new();
        let out = n.normalize("Team von 12 Leuten");
        assert_eq!(out, "team von leuten");
    }

    #[test]
    fn test_line_dedup_first_occurrence_wins() {
        let n = TextNormalizer::new();
        // Duplicate lines are dropped, not duplicate words within a line.
        assert_eq!(n.normalize("Visit http://x.io now\nnow"), "visit now");
        assert_eq!(n.normalize("now now"), "now now");
        assert_eq!(n.normalize("a\nb\na\nc"), "a b c");
    }

    #[test]
    fn test_idempotent() {
        let n = TextNormalizer::new();
        let input = "Senior   Data Engineer\nhttp://x.io\nSQL & Python\nSQL & Python";
        let once = n.normalize(input);
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   \n\t  "), "");
    }
}
