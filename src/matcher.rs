use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("cannot match against an empty corpus")]
    EmptyCorpus,
}

/// Index of the winning document in the corpus, plus its cosine similarity
/// to the query in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub index: usize,
    pub score: f64,
}

/// Ranks documents against a query with TF-IDF weights and cosine
/// similarity. Stateless; the query is kept as its own vector rather than
/// smuggled into the corpus by position.
pub struct SimilarityMatcher;

impl SimilarityMatcher {
    pub fn new() -> Self {
        SimilarityMatcher
    }

    /// Picks the document most similar to the query. Ties go to the lowest
    /// index. An empty query is fine (every score is 0.0 and document 0
    /// wins); an empty corpus is a caller error.
    pub fn find_best_match(&self, query: &str, documents: &[String]) -> Result<BestMatch, MatchError> {
        if documents.is_empty() {
            return Err(MatchError::EmptyCorpus);
        }

        let doc_terms: Vec<BTreeMap<&str, f64>> = documents.iter().map(|d| term_counts(d)).collect();
        let query_terms = term_counts(query);

        // Document frequency over the corpus plus the query itself.
        let n = documents.len() + 1;
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in doc_terms.iter().chain(std::iter::once(&query_terms)) {
            for &term in terms.keys() {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Smoothed idf, always positive, no division by zero.
        let idf: BTreeMap<&str, f64> = df
            .iter()
            .map(|(&term, &count)| {
                (term, 1.0 + ((1.0 + n as f64) / (1.0 + count as f64)).ln())
            })
            .collect();

        let query_vec = weigh(&query_terms, &idf);

        let mut best = BestMatch { index: 0, score: 0.0 };
        let mut first = true;
        for (i, terms) in doc_terms.iter().enumerate() {
            let score = cosine_similarity(&query_vec, &weigh(terms, &idf));
            if first || score > best.score {
                best = BestMatch { index: i, score };
                first = false;
            }
        }
        Ok(best)
    }
}

fn term_counts(text: &str) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn weigh<'a>(terms: &BTreeMap<&'a str, f64>, idf: &BTreeMap<&str, f64>) -> BTreeMap<&'a str, f64> {
    terms
        .iter()
        .map(|(&term, &tf)| (term, tf * idf.get(term).copied().unwrap_or(0.0)))
        .collect()
}

fn cosine_similarity(a: &BTreeMap<&str, f64>, b: &BTreeMap<&str, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(&term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
