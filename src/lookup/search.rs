//! Search over the shop list.
//!
//! A term of digits is a code lookup (exact match on either code); anything
//! else is a name lookup (case-insensitive substring, whitespace ignored).

use crate::types::ShopRecord;

/// Code length that triggers the placeholder row on an empty result.
const PROBE_CODE_LEN: usize = 4;

/// A parsed search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Empty term: everything.
    All,
    /// Exact code match against `mcc` or `mccMir`.
    Code(String),
    /// Lowercased name fragment.
    Name(String),
}

impl SearchQuery {
    /// Parse raw search input.
    pub fn parse(raw: &str) -> Self {
        let term = normalize_term(raw);

        if term.is_empty() {
            Self::All
        } else if term.chars().all(|c| c.is_ascii_digit()) {
            Self::Code(term)
        } else {
            Self::Name(term.to_lowercase())
        }
    }

    /// Whether `record` satisfies this query.
    pub fn matches(&self, record: &ShopRecord) -> bool {
        match self {
            Self::All => true,
            Self::Code(code) => record.has_code(code),
            Self::Name(fragment) => strip_whitespace(&record.name)
                .to_lowercase()
                .contains(fragment.as_str()),
        }
    }

    /// Filter `records`, keeping their order.
    pub fn filter(&self, records: Vec<ShopRecord>) -> Vec<ShopRecord> {
        match self {
            Self::All => records,
            _ => records.into_iter().filter(|r| self.matches(r)).collect(),
        }
    }
}

/// Search results, possibly a single placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHits {
    pub records: Vec<ShopRecord>,
    /// The only record is a synthetic `MCC <code>` row.
    pub probe: bool,
}

/// Run a search.
///
/// A 4-digit code with no stored match yields one placeholder record so the
/// code can still be checked against the catalog.
pub fn search(records: Vec<ShopRecord>, raw: &str) -> SearchHits {
    let query = SearchQuery::parse(raw);
    let records = query.filter(records);

    match &query {
        SearchQuery::Code(code) if records.is_empty() && code.len() == PROBE_CODE_LEN => {
            SearchHits {
                records: vec![ShopRecord::probe(code)],
                probe: true,
            }
        }
        _ => SearchHits {
            records,
            probe: false,
        },
    }
}

/// Trim, then drop commas and whitespace.
pub fn normalize_term(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shops() -> Vec<ShopRecord> {
        vec![
            ShopRecord::new("Cafe X", "5812"),
            ShopRecord::new("Big Mart", "5411").with_mir(Some("5311".to_string())),
            ShopRecord::new("Аптека Плюс", "5912"),
            ShopRecord::new("cafe y", "5814"),
        ]
    }

    fn names(hits: &SearchHits) -> Vec<&str> {
        hits.records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!(SearchQuery::parse("   "), SearchQuery::All);
        assert_eq!(SearchQuery::parse(" 58,12 "), SearchQuery::Code("5812".to_string()));
        assert_eq!(
            SearchQuery::parse("Big Mart"),
            SearchQuery::Name("bigmart".to_string())
        );
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let hits = search(shops(), "");
        assert_eq!(names(&hits), vec!["Cafe X", "Big Mart", "Аптека Плюс", "cafe y"]);
        assert!(!hits.probe);
    }

    #[test]
    fn test_code_search_is_exact_on_either_code() {
        assert_eq!(names(&search(shops(), "5812")), vec!["Cafe X"]);
        assert_eq!(names(&search(shops(), "5311")), vec!["Big Mart"]);
        // Not a substring match.
        assert!(search(shops(), "581").records.is_empty());
    }

    #[test]
    fn test_every_record_found_by_its_mcc() {
        let all = shops();
        for shop in &all {
            let hits = search(all.clone(), &shop.mcc);
            assert!(hits.records.iter().any(|r| r.id == shop.id));
        }
    }

    #[test]
    fn test_unknown_four_digit_code_yields_probe() {
        let hits = search(shops(), "7011");
        assert!(hits.probe);
        assert_eq!(hits.records.len(), 1);
        assert_eq!(hits.records[0].name, "MCC 7011");
        assert_eq!(hits.records[0].mcc, "7011");

        // Other lengths just come back empty.
        let hits = search(shops(), "70111");
        assert!(!hits.probe);
        assert!(hits.records.is_empty());
    }

    #[test]
    fn test_name_search_ignores_case_and_spaces() {
        assert_eq!(names(&search(shops(), "CAFE")), vec!["Cafe X", "cafe y"]);
        assert_eq!(names(&search(shops(), "big mart")), vec!["Big Mart"]);
        assert_eq!(names(&search(shops(), "cafex")), vec!["Cafe X"]);
        assert_eq!(names(&search(shops(), "аптека")), vec!["Аптека Плюс"]);
    }

    #[test]
    fn test_name_search_excludes_non_matching() {
        let term = "mar";
        let all = shops();
        let hits = search(all.clone(), term);
        for shop in &all {
            let contains = strip_whitespace(&shop.name).to_lowercase().contains(term);
            assert_eq!(hits.records.iter().any(|r| r.id == shop.id), contains);
        }
    }
}
