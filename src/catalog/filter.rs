//! Search semantics for the explore endpoint
//!
//! A dataset matches when every query word appears in at least one indexed
//! field: title, description, tags, author name/affiliation/ORCID, or the
//! movie fields (title, original title, director, genre, synopsis,
//! production company). Matching is case- and accent-insensitive, and a
//! small punctuation class is stripped from queries before word splitting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::{PublicationType, SearchCriteria, SortOrder};

use super::store::DatasetRecord;

/// Punctuation removed from queries before splitting into words.
static QUERY_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[,.":'()\[\]^;!¡¿?]"#).expect("valid punctuation pattern"));

/// Lowercase `text` and fold Latin accents so "Almodóvar" matches
/// "almodovar". Characters outside the folding table pass through lowercased.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        for lower in c.to_lowercase() {
            match lower {
                'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => out.push('a'),
                'ç' => out.push('c'),
                'è' | 'é' | 'ê' | 'ë' => out.push('e'),
                'ì' | 'í' | 'î' | 'ï' => out.push('i'),
                'ñ' => out.push('n'),
                'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => out.push('o'),
                'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
                'ý' | 'ÿ' => out.push('y'),
                'æ' => out.push_str("ae"),
                'œ' => out.push_str("oe"),
                'ß' => out.push_str("ss"),
                other => out.push(other),
            }
        }
    }
    out
}

/// Split a raw query into normalized search words.
pub fn normalize_query(query: &str) -> Vec<String> {
    let stripped = QUERY_PUNCTUATION.replace_all(query, "");
    normalize_text(&stripped)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn contains_word(field: &str, word: &str) -> bool {
    normalize_text(field).contains(word)
}

fn optional_contains(field: &Option<String>, word: &str) -> bool {
    field.as_deref().is_some_and(|f| contains_word(f, word))
}

/// True when `word` appears somewhere in the dataset record.
fn record_matches_word(dataset: &DatasetRecord, word: &str) -> bool {
    if contains_word(&dataset.title, word) || contains_word(&dataset.description, word) {
        return true;
    }
    if dataset.tags.iter().any(|tag| contains_word(tag, word)) {
        return true;
    }
    if dataset.authors.iter().any(|author| {
        contains_word(&author.name, word)
            || optional_contains(&author.affiliation, word)
            || optional_contains(&author.orcid, word)
    }) {
        return true;
    }
    dataset.movies.iter().any(|movie| {
        contains_word(&movie.title, word)
            || optional_contains(&movie.original_title, word)
            || optional_contains(&movie.director, word)
            || optional_contains(&movie.genre, word)
            || optional_contains(&movie.synopsis, word)
            || optional_contains(&movie.production_company, word)
    })
}

/// Apply the full search semantics: published datasets only, every query
/// word must match, then the optional category filter, then sort by upload
/// date per the requested order.
pub fn filter_datasets<'a>(
    datasets: &'a [DatasetRecord],
    criteria: &SearchCriteria,
) -> Vec<&'a DatasetRecord> {
    let words = normalize_query(&criteria.query);
    let category = PublicationType::from_wire(&criteria.publication_type);

    let mut matches: Vec<&DatasetRecord> = datasets
        .iter()
        .filter(|d| d.is_published())
        .filter(|d| words.iter().all(|word| record_matches_word(d, word)))
        .filter(|d| category.is_none_or(|c| d.publication_type == c))
        .collect();

    match SortOrder::from_wire(&criteria.sorting) {
        SortOrder::Oldest => matches.sort_by_key(|d| d.created_at),
        SortOrder::Newest => matches.sort_by_key(|d| std::cmp::Reverse(d.created_at)),
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::MovieRecord;
    use crate::domain::models::Author;
    use chrono::{TimeZone, Utc};

    fn make_dataset(id: u64, title: &str) -> DatasetRecord {
        DatasetRecord {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            publication_type: PublicationType::Other,
            publication_doi: None,
            dataset_doi: Some(format!("10.1234/test-{id}")),
            tags: Vec::new(),
            authors: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, id as u32, 12, 0, 0).unwrap(),
            total_size_in_bytes: 1024,
            movies: Vec::new(),
        }
    }

    fn make_movie(title: &str, director: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            original_title: None,
            year: 1994,
            director: Some(director.to_string()),
            genre: None,
            synopsis: None,
            production_company: None,
        }
    }

    fn criteria(query: &str) -> SearchCriteria {
        SearchCriteria::new(query, "any", "newest")
    }

    #[test]
    fn test_empty_query_returns_all_published() {
        let datasets = vec![make_dataset(1, "First"), make_dataset(2, "Second")];
        let matched = filter_datasets(&datasets, &criteria(""));
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_unpublished_datasets_excluded() {
        let mut draft = make_dataset(1, "Hidden Draft");
        draft.dataset_doi = None;
        let datasets = vec![draft, make_dataset(2, "Published")];

        let matched = filter_datasets(&datasets, &criteria(""));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Published");
    }

    #[test]
    fn test_word_matches_title_and_description() {
        let datasets = vec![make_dataset(1, "Space Operas"), make_dataset(2, "Westerns")];

        let by_title = filter_datasets(&datasets, &criteria("space"));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 1);

        // "description" appears in every generated description
        let by_description = filter_datasets(&datasets, &criteria("description"));
        assert_eq!(by_description.len(), 2);
    }

    #[test]
    fn test_word_matches_tags_authors_and_movies() {
        let mut dataset = make_dataset(1, "Collection");
        dataset.tags = vec!["noir".to_string()];
        dataset.authors = vec![Author {
            name: "Rita Research".to_string(),
            affiliation: Some("Film Institute".to_string()),
            orcid: Some("0000-0002-1825-0097".to_string()),
        }];
        dataset.movies = vec![make_movie("Pulp Fiction", "Quentin Tarantino")];
        let datasets = vec![dataset, make_dataset(2, "Other")];

        for query in ["noir", "institute", "1825", "tarantino", "pulp"] {
            let matched = filter_datasets(&datasets, &criteria(query));
            assert_eq!(matched.len(), 1, "query {query:?} should match");
            assert_eq!(matched[0].id, 1);
        }
    }

    #[test]
    fn test_every_word_must_match_somewhere() {
        let mut dataset = make_dataset(1, "Crime Films");
        dataset.movies = vec![make_movie("Reservoir Dogs", "Quentin Tarantino")];
        let datasets = vec![dataset];

        // Words may hit different fields of the same dataset
        assert_eq!(filter_datasets(&datasets, &criteria("crime tarantino")).len(), 1);
        // One unmatched word rejects the dataset
        assert_eq!(filter_datasets(&datasets, &criteria("crime kubrick")).len(), 0);
    }

    #[test]
    fn test_matching_folds_case_and_accents() {
        let mut dataset = make_dataset(1, "European Cinema");
        dataset.movies = vec![make_movie("Volver", "Pedro Almodóvar")];
        let datasets = vec![dataset];

        assert_eq!(filter_datasets(&datasets, &criteria("ALMODÓVAR")).len(), 1);
        assert_eq!(filter_datasets(&datasets, &criteria("almodovar")).len(), 1);
    }

    #[test]
    fn test_query_punctuation_stripped() {
        let mut dataset = make_dataset(1, "Crime");
        dataset.movies = vec![make_movie("Pulp Fiction", "Quentin Tarantino")];
        let datasets = vec![dataset];

        let matched = filter_datasets(&datasets, &criteria("\"pulp\" fiction!"));
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let mut article = make_dataset(1, "Article Dataset");
        article.publication_type = PublicationType::JournalArticle;
        let other = make_dataset(2, "Other Dataset");
        let datasets = vec![article, other];

        let matched = filter_datasets(&datasets, &SearchCriteria::new("", "article", "newest"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);

        // "any" and unknown tokens disable the category filter
        assert_eq!(filter_datasets(&datasets, &SearchCriteria::new("", "any", "newest")).len(), 2);
        assert_eq!(
            filter_datasets(&datasets, &SearchCriteria::new("", "mixtape", "newest")).len(),
            2
        );
    }

    #[test]
    fn test_sort_orders() {
        let datasets = vec![
            make_dataset(3, "Newest"),
            make_dataset(1, "Oldest"),
            make_dataset(2, "Middle"),
        ];

        let newest_first = filter_datasets(&datasets, &SearchCriteria::new("", "any", "newest"));
        let ids: Vec<u64> = newest_first.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let oldest_first = filter_datasets(&datasets, &SearchCriteria::new("", "any", "oldest"));
        let ids: Vec<u64> = oldest_first.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_normalize_query_words() {
        assert_eq!(normalize_query("  Sci-Fi, Classics!  "), vec!["sci-fi", "classics"]);
        assert_eq!(normalize_query("Almodóvar's (films)"), vec!["almodovars", "films"]);
        assert!(normalize_query("").is_empty());
        assert!(normalize_query("?!,.").is_empty());
    }
}
