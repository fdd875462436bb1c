use super::corpus::Corpus;
use super::error::SearchError;
use super::tokenizer::{normalize_query, tokenize};
use super::types::{CatalogDoc, ScoredCandidate, SearchResponse};
use crate::catalog::store::CatalogSource;
use crate::config::SearchConfig;
use regex::Regex;

pub(crate) const NO_PRODUCTS_MESSAGE: &str = "No products found.";

/// Ranks the full catalog against a query.
///
/// Pipeline: validate and tokenize the query, fetch the current catalog,
/// build a call-scoped corpus over it, score every entry (TF-IDF relevance
/// plus exact whole-word match boost), sort by descending score, and drop
/// everything that scored zero. `user_id` is echoed back untouched for
/// request correlation.
pub async fn search<C: CatalogSource>(
    catalog: &C,
    raw_query: &str,
    user_id: Option<String>,
    config: &SearchConfig,
) -> Result<SearchResponse, SearchError> {
    let query = normalize_query(raw_query).ok_or(SearchError::InvalidQuery)?;
    let query_terms = tokenize(&query);

    let products = catalog
        .list_all()
        .await
        .map_err(SearchError::CatalogUnavailable)?;

    if products.is_empty() {
        return Ok(SearchResponse {
            products: Vec::new(),
            message: Some(NO_PRODUCTS_MESSAGE.to_string()),
            user_id,
        });
    }

    let docs: Vec<CatalogDoc<'_>> = products.iter().map(CatalogDoc::from).collect();
    let corpus = Corpus::build(&docs);
    let ranking = rank(&corpus, &query_terms, config.exact_match_weight);

    let ranked_products = ranking
        .iter()
        .map(|candidate| products[candidate.index].clone())
        .collect();

    Ok(SearchResponse {
        products: ranked_products,
        message: None,
        user_id,
    })
}

/// Scores every corpus entry and returns the candidates with positive
/// combined score, sorted by score descending.
///
/// The sort is stable, so entries with equal scores keep their catalog
/// order. Each query token that appears in an entry as a whole word adds
/// `exact_match_weight` once, regardless of how often it occurs there;
/// duplicated query tokens each contribute.
pub(crate) fn rank(
    corpus: &Corpus,
    query_terms: &[String],
    exact_match_weight: f64,
) -> Vec<ScoredCandidate> {
    let boost_patterns: Vec<Regex> = query_terms
        .iter()
        .map(|token| Regex::new(&format!(r"\b{}\b", regex::escape(token))).unwrap())
        .collect();

    let mut candidates: Vec<ScoredCandidate> = (0..corpus.len())
        .map(|index| {
            let relevance = corpus.tfidf(index, query_terms);
            let exact_matches = boost_patterns
                .iter()
                .filter(|pattern| pattern.is_match(corpus.text(index)))
                .count();

            ScoredCandidate {
                index,
                score: relevance + exact_matches as f64 * exact_match_weight,
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.retain(|candidate| candidate.score > 0.0);
    candidates
}
