use crate::vocabulary::SKILL_VOCABULARY;

/// Scans text for known skill labels. The vocabulary is injected at
/// construction so tests can swap in their own lists; nothing is mutated
/// after that.
pub struct SkillExtractor {
    vocabulary: Vec<String>,
}

impl SkillExtractor {
    pub fn new(vocabulary: Vec<String>) -> Self {
        SkillExtractor { vocabulary }
    }

    pub fn with_default_vocabulary() -> Self {
        SkillExtractor::new(SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect())
    }

    /// Case-insensitive substring containment against each vocabulary
    /// entry, output in vocabulary order and original casing. Plain
    /// substring matching, no word boundaries: "Java" also matches inside
    /// "JavaScript". That mirrors how the listings actually phrase skills
    /// (e.g. "SQL" inside "T-SQL" should count).
    pub fn extract(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|skill| haystack.contains(&skill.to_lowercase()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(vocab: &[&str]) -> SkillExtractor {
        SkillExtractor::new(vocab.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_vocabulary_order_not_text_order() {
        let e = extractor(&["SQL", "Python", "Java"]);
        let skills = e.extract("Python and SQL skills required");
        assert_eq!(skills, vec!["SQL", "Python"]);
    }

    #[test]
    fn test_case_insensitive_original_casing_kept() {
        let e = extractor(&["Power BI", "ETL"]);
        let skills = e.extract("erfahrung mit power bi und etl-strecken");
        assert_eq!(skills, vec!["Power BI", "ETL"]);
    }

    #[test]
    fn test_substring_match_inside_longer_token() {
        let e = extractor(&["Java"]);
        assert_eq!(e.extract("JavaScript developer"), vec!["Java"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let e = extractor(&["SQL"]);
        assert!(e.extract("Bäckerei sucht Verkäufer").is_empty());
    }

    #[test]
    fn test_no_duplicates_even_with_repeated_mentions() {
        let e = extractor(&["Python"]);
        assert_eq!(e.extract("Python Python Python"), vec!["Python"]);
    }

    #[test]
    fn test_default_vocabulary_subset_invariant() {
        let e = SkillExtractor::with_default_vocabulary();
        let skills = e.extract("Wir suchen Data Engineering Profis mit Python, SQL und Apache Kafka");
        for s in &skills {
            assert!(SKILL_VOCABULARY.contains(&s.as_str()));
        }
        // vocabulary order: Data Engineering (idx 14) before SQL (28) before Python (35)
        let de = skills.iter().position(|s| s == "Data Engineering").unwrap();
        let sql = skills.iter().position(|s| s == "SQL").unwrap();
        let py = skills.iter().position(|s| s == "Python").unwrap();
        assert!(de < sql && sql < py);
    }
}
