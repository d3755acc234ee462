use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_query_defaults_missing_values() {
    let filters = SearchFilters::from_query(lookup(&[]));
    assert_eq!(filters, SearchFilters::default());
    assert_eq!(filters.sort, SortOrder::Desc);
}

#[test]
fn from_query_reads_all_filters() {
    let filters = SearchFilters::from_query(lookup(&[("searchTerm", "rust"), ("sort", "asc"), ("category", "web")]));
    assert_eq!(filters, SearchFilters {
        search_term: "rust".to_owned(),
        sort: SortOrder::Asc,
        category: "web".to_owned(),
    });
}

#[test]
fn unknown_sort_falls_back_to_newest_first() {
    assert_eq!(SortOrder::parse("sideways"), SortOrder::Desc);
}

#[test]
fn to_query_omits_blank_category() {
    let filters = SearchFilters { search_term: " rust ".to_owned(), ..SearchFilters::default() };
    assert_eq!(filters.to_query(), "searchTerm=rust&sort=desc");
}

#[test]
fn to_query_includes_category_when_set() {
    let filters = SearchFilters { search_term: "rust".to_owned(), sort: SortOrder::Asc, category: "web".to_owned() };
    assert_eq!(filters.to_query(), "searchTerm=rust&sort=asc&category=web");
}

#[test]
fn page_query_appends_start_index_after_first_page() {
    let filters = SearchFilters::default();
    assert_eq!(filters.page_query(0), "searchTerm=&sort=desc");
    assert_eq!(filters.page_query(9), "searchTerm=&sort=desc&startIndex=9");
}
