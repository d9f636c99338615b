//! Keyword-based relevance retrieval over the portfolio chunk store.
//!
//! Flow:
//!   1. Preprocess the query: expand with synonym terms, classify intent.
//!   2. Score every chunk against the expanded query (keyword hits weigh 2,
//!      intent bonuses 1-2, content term hits 0.5).
//!   3. Keep positive scores, stable-sort descending, join the top `max_chunks`
//!      contents with a blank line.
//!   4. If nothing scores, fall back to the bio + skills chunks so the prompt
//!      always gets context.
// TODO: upgrade to semantic embeddings for better relevance

use std::sync::LazyLock;

use regex::Regex;

use crate::chunks::{Chunk, KEYWORD_SYNONYMS, PORTFOLIO_CHUNKS};
use crate::models::Intent;

static SHOW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"show|display|view|see|list").unwrap());
static PROJECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"project").unwrap());
static EXPERIENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"experience|work|job|career|role").unwrap());
static SKILLS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"skill|tech|stack|technolog|framework|language").unwrap());
static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"contact|email|phone|reach|connect").unwrap());

/// A query after synonym expansion and intent classification.
#[derive(Debug, Clone)]
pub struct PreprocessedQuery {
    pub expanded_query: String,
    pub intent: Intent,
}

/// Expand a raw query with synonym terms and classify its intent.
///
/// Any input (including empty) produces a valid result; intent falls back to
/// [`Intent::General`] when no rule matches.
pub fn preprocess_query(query: &str) -> PreprocessedQuery {
    let lower = query.to_lowercase();
    let mut terms: Vec<String> = lower.split_whitespace().map(str::to_string).collect();

    // Synonym expansion: a canonical term or any of its synonyms appearing as
    // a substring pulls the whole group into the expansion set, deduplicated.
    let mut expansion: Vec<&str> = Vec::new();
    for &(canonical, synonyms) in KEYWORD_SYNONYMS {
        if lower.contains(canonical) || synonyms.iter().any(|syn| lower.contains(syn)) {
            if !expansion.contains(&canonical) {
                expansion.push(canonical);
            }
            for &syn in synonyms {
                if !expansion.contains(&syn) {
                    expansion.push(syn);
                }
            }
        }
    }
    terms.extend(expansion.into_iter().map(str::to_string));

    // Fixed-priority intent rules over the raw (lower-cased) query.
    let intent = if SHOW_RE.is_match(&lower) && PROJECT_RE.is_match(&lower) {
        Intent::Projects
    } else if EXPERIENCE_RE.is_match(&lower) {
        Intent::Experience
    } else if SKILLS_RE.is_match(&lower) {
        Intent::Skills
    } else if CONTACT_RE.is_match(&lower) {
        Intent::Contact
    } else {
        Intent::General
    };

    PreprocessedQuery {
        expanded_query: terms.join(" "),
        intent,
    }
}

/// Score one chunk against the expanded query.
fn score_chunk(chunk: &Chunk, expanded_lower: &str, intent: Intent) -> f64 {
    let mut score = 0.0;

    // Exact keyword matches carry the most weight; intent bonuses apply per
    // matching keyword, like the keyword hit itself.
    for keyword in chunk.keywords {
        if expanded_lower.contains(keyword) {
            score += 2.0;
            match intent {
                Intent::Experience if chunk.keywords.contains(&"experience") => score += 1.0,
                Intent::Skills if chunk.keywords.contains(&"skills") => score += 1.0,
                Intent::Projects if chunk.id.contains("details") => score += 1.0,
                Intent::Contact if chunk.id == "bio" => score += 2.0,
                _ => {}
            }
        }
    }

    // Partial matches in the chunk body, lower weight, once per query term.
    let content_lower = chunk.content.to_lowercase();
    for term in expanded_lower.split_whitespace() {
        if term.len() > 3 && content_lower.contains(term) {
            score += 0.5;
        }
    }

    score
}

/// Retrieve the concatenated content of the top-scoring chunks for `query`.
pub fn retrieve(query: &str, max_chunks: usize) -> String {
    retrieve_from(PORTFOLIO_CHUNKS, query, max_chunks)
}

/// Same as [`retrieve`] but over an explicit store, for tests.
pub fn retrieve_from(chunks: &[Chunk], query: &str, max_chunks: usize) -> String {
    let PreprocessedQuery {
        expanded_query,
        intent,
    } = preprocess_query(query);
    let expanded_lower = expanded_query.to_lowercase();

    let mut scored: Vec<(&Chunk, f64)> = chunks
        .iter()
        .map(|chunk| (chunk, score_chunk(chunk, &expanded_lower, intent)))
        .filter(|(_, score)| *score > 0.0)
        .collect();

    // Stable sort keeps store order among ties.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let top: Vec<&str> = scored
        .iter()
        .take(max_chunks)
        .map(|(chunk, _)| chunk.content)
        .collect();

    if top.is_empty() {
        // Fallback for queries nothing matched: bio + skills.
        let bio = chunks
            .iter()
            .find(|c| c.id == "bio")
            .map(|c| c.content)
            .unwrap_or_default();
        let skills = chunks
            .iter()
            .find(|c| c.id == "skills")
            .map(|c| c.content)
            .unwrap_or_default();
        return format!("{}\n\n{}", bio, skills);
    }

    top.join("\n\n")
}
