pub mod features;
pub mod rules;

use tracing::debug;

use crate::report::types::{AnalysisResult, Breakdown};
use features::QueryFeatures;
use rules::RULES;

/// Score a query for performance, scalability, and maintainability risks.
///
/// Total over every input: empty, malformed, or non-SQL text still yields a
/// result. Rules run in a fixed order and each may add one risk and credit
/// its points to a single category.
pub fn analyze(query: &str) -> AnalysisResult {
    let features = QueryFeatures::extract(query);
    debug!(
        joins = features.join_count,
        select_star = features.select_star,
        has_where = features.has_where,
        has_limit = features.has_limit,
        has_order_by = features.has_order_by,
        subqueries = features.subquery_count,
        has_group_by = features.has_group_by,
        "extracted query features"
    );

    let mut breakdown = Breakdown::default();
    let mut risks = Vec::new();
    for rule in RULES.iter().filter(|rule| (rule.applies)(&features)) {
        debug!(category = %rule.category, points = rule.points, "{}", rule.message);
        breakdown.add(rule.category, rule.points);
        risks.push(rule.to_risk());
    }

    AnalysisResult::new(breakdown, risks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::{Category, Grade};

    fn messages(result: &AnalysisResult) -> Vec<&str> {
        result.risks.iter().map(|r| r.message.as_str()).collect()
    }

    #[test]
    fn test_select_star_without_filters() {
        let result = analyze("SELECT * FROM t");
        assert_eq!(
            messages(&result),
            vec!["SELECT * detected", "No WHERE or LIMIT clause"]
        );
        assert_eq!(result.breakdown.performance_score, 40);
        assert_eq!(result.total_score, 40);
        assert_eq!(result.grade, Grade::C);
    }

    #[test]
    fn test_clean_query_scores_zero() {
        let result = analyze("SELECT id FROM t WHERE id=1 LIMIT 10");
        assert!(result.risks.is_empty());
        assert_eq!(result.total_score, 0);
        assert_eq!(result.grade, Grade::A);
    }

    #[test]
    fn test_four_joins() {
        let query = "SELECT a.id FROM a JOIN b ON a.id=b.id JOIN c ON c.id=a.id \
                     JOIN d ON d.id=a.id JOIN e ON e.id=a.id WHERE a.id=1";
        let result = analyze(query);
        assert_eq!(messages(&result), vec!["Too many JOIN operations"]);
        assert_eq!(result.risks[0].category, Category::Scalability);
        assert_eq!(result.breakdown.scalability_score, 20);
        assert_eq!(result.total_score, 20);
        assert_eq!(result.grade, Grade::B);
    }

    #[test]
    fn test_group_by_with_three_joins() {
        let query = "SELECT a.k, count(*) FROM a JOIN b ON a.id=b.id \
                     JOIN c ON c.id=a.id JOIN d ON d.id=a.id GROUP BY a.k";
        let result = analyze(query);
        assert_eq!(
            messages(&result),
            vec!["No WHERE or LIMIT clause", "GROUP BY with multiple JOINs"]
        );
        assert_eq!(result.breakdown.performance_score, 25);
        assert_eq!(result.breakdown.scalability_score, 15);
        assert_eq!(result.total_score, 40);
        assert_eq!(result.grade, Grade::C);
    }

    #[test]
    fn test_empty_query_reaches_rule_two_only() {
        let result = analyze("");
        assert_eq!(messages(&result), vec!["No WHERE or LIMIT clause"]);
        assert_eq!(result.total_score, 25);
        assert_eq!(result.grade, Grade::B);
    }

    #[test]
    fn test_non_sql_text_is_accepted() {
        let result = analyze("\u{0}\u{7f} not a query at all \u{fffd}");
        assert_eq!(result.total_score, 25);
    }

    #[test]
    fn test_worst_case_scores_one_hundred_in_rule_order() {
        let query = "SELECT * FROM (SELECT * FROM (SELECT x FROM (SELECT y FROM z) s) r) q \
                     JOIN a ON 1=1 JOIN b ON 1=1 JOIN c ON 1=1 JOIN d ON 1=1 \
                     GROUP BY q.k ORDER BY q.k";
        let result = analyze(query);
        assert_eq!(
            messages(&result),
            vec![
                "SELECT * detected",
                "No WHERE or LIMIT clause",
                "ORDER BY without LIMIT",
                "Too many JOIN operations",
                "Multiple nested subqueries",
                "GROUP BY with multiple JOINs",
            ]
        );
        assert_eq!(result.breakdown.performance_score, 55);
        assert_eq!(result.breakdown.scalability_score, 35);
        assert_eq!(result.breakdown.maintainability_score, 10);
        assert_eq!(result.total_score, 100);
        assert_eq!(result.grade, Grade::F);
    }

    #[test]
    fn test_total_matches_breakdown_and_is_idempotent() {
        let queries = [
            "",
            "select * from t order by x",
            "SELECT a FROM t JOIN u JOIN v JOIN w GROUP BY a LIMIT 5",
            "UPDATE somewhere SET x = 1",
            "((select 1)) ( select 2) (select 3)",
        ];
        for query in queries {
            let first = analyze(query);
            assert_eq!(first.total_score, first.breakdown.total(), "query: {query}");
            assert_eq!(first.grade, Grade::from_score(first.total_score));
            assert_eq!(first, analyze(query));
        }
    }

    #[test]
    fn test_unrelated_text_does_not_change_other_rules() {
        let base = analyze("SELECT id FROM t WHERE x = 1 ORDER BY id");
        let with_star = analyze("SELECT * FROM t WHERE x = 1 ORDER BY id");
        assert_eq!(messages(&base), vec!["ORDER BY without LIMIT"]);
        assert_eq!(
            messages(&with_star),
            vec!["SELECT * detected", "ORDER BY without LIMIT"]
        );
    }
}
