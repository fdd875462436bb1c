use super::tokenizer::tokenize;
use super::types::CatalogDoc;
use std::collections::HashMap;

struct CorpusEntry {
    /// Lowercased `name + " " + description`.
    text: String,
    /// Raw occurrence count per term within this entry.
    term_counts: HashMap<String, usize>,
}

/// Term statistics over one snapshot of the catalog.
///
/// A `Corpus` is built fresh inside every search call and dropped with it:
/// entry `i` always corresponds to position `i` of the catalog sequence the
/// corpus was built from, and no statistics survive into the next call.
/// Concurrent searches therefore never share ranking state.
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    /// Number of entries containing each term at least once.
    doc_frequency: HashMap<String, usize>,
}

impl Corpus {
    /// Indexes the given documents in order.
    pub fn build(docs: &[CatalogDoc<'_>]) -> Self {
        let mut entries = Vec::with_capacity(docs.len());
        let mut doc_frequency: HashMap<String, usize> = HashMap::new();

        for doc in docs {
            let text = format!("{} {}", doc.name, doc.description).to_lowercase();

            let mut term_counts: HashMap<String, usize> = HashMap::new();
            for token in tokenize(&text) {
                *term_counts.entry(token).or_insert(0) += 1;
            }
            for term in term_counts.keys() {
                *doc_frequency.entry(term.clone()).or_insert(0) += 1;
            }

            entries.push(CorpusEntry { text, term_counts });
        }

        Self {
            entries,
            doc_frequency,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowercased text of entry `i`.
    pub fn text(&self, i: usize) -> &str {
        &self.entries[i].text
    }

    /// Inverse document frequency of a term: `1 + ln(N / (1 + df))`.
    /// Terms appearing in fewer entries weigh more.
    fn idf(&self, term: &str) -> f64 {
        let df = self.doc_frequency.get(term).copied().unwrap_or(0) as f64;
        1.0 + (self.entries.len() as f64 / (1.0 + df)).ln()
    }

    /// TF-IDF relevance of entry `i` against the query terms: the sum over
    /// terms of the raw in-entry frequency times corpus-wide rarity. Zero
    /// when the entry contains none of the terms.
    pub fn tfidf(&self, i: usize, query_terms: &[String]) -> f64 {
        let entry = &self.entries[i];
        query_terms
            .iter()
            .map(|term| match entry.term_counts.get(term) {
                Some(&count) => count as f64 * self.idf(term),
                None => 0.0,
            })
            .sum()
    }
}
