use regex::Regex;
use std::sync::OnceLock;

/// Surface-level facts pulled out of a query string.
///
/// Every detection is a case-insensitive pattern match over the raw text.
/// Keywords are not word-bounded, so `where` inside `somewhere` counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryFeatures {
    pub join_count: usize,
    pub select_star: bool,
    pub has_where: bool,
    pub has_limit: bool,
    pub has_order_by: bool,
    pub subquery_count: usize,
    pub has_group_by: bool,
}

impl QueryFeatures {
    pub fn extract(query: &str) -> Self {
        Self {
            join_count: join_regex().find_iter(query).count(),
            select_star: select_star_regex().is_match(query),
            has_where: where_regex().is_match(query),
            has_limit: limit_regex().is_match(query),
            has_order_by: order_by_regex().is_match(query),
            subquery_count: subquery_regex().find_iter(query).count(),
            has_group_by: group_by_regex().is_match(query),
        }
    }
}

fn join_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)join").expect("join regex should compile"))
}

fn select_star_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)select\s*\*").expect("select-star regex should compile"))
}

fn where_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)where").expect("where regex should compile"))
}

fn limit_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)limit").expect("limit regex should compile"))
}

fn order_by_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)order\s+by").expect("order-by regex should compile"))
}

fn subquery_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)\(\s*select").expect("subquery regex should compile"))
}

fn group_by_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)group\s+by").expect("group-by regex should compile"))
}
