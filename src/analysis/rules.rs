use super::features::QueryFeatures;
use crate::report::types::{Category, Risk};

/// One heuristic check over extracted query features.
///
/// A rule fires at most once per query and credits its points to the
/// bucket named by `category`.
pub struct Rule {
    pub category: Category,
    pub message: &'static str,
    pub suggestion: &'static str,
    pub points: u32,
    pub applies: fn(&QueryFeatures) -> bool,
}

impl Rule {
    pub fn to_risk(&self) -> Risk {
        Risk {
            category: self.category,
            message: self.message.to_string(),
            suggestion: self.suggestion.to_string(),
        }
    }
}

/// All rules, in evaluation order. Risk output follows this order.
pub const RULES: [Rule; 6] = [
    Rule {
        category: Category::Performance,
        message: "SELECT * detected",
        suggestion: "Specify only required columns.",
        points: 15,
        applies: check_select_star,
    },
    Rule {
        category: Category::Performance,
        message: "No WHERE or LIMIT clause",
        suggestion: "May cause full table scan.",
        points: 25,
        applies: check_unbounded_scan,
    },
    Rule {
        category: Category::Performance,
        message: "ORDER BY without LIMIT",
        suggestion: "Sorting large dataset can be expensive.",
        points: 15,
        applies: check_unbounded_sort,
    },
    Rule {
        category: Category::Scalability,
        message: "Too many JOIN operations",
        suggestion: "Consider indexing join columns.",
        points: 20,
        applies: check_join_count,
    },
    Rule {
        category: Category::Maintainability,
        message: "Multiple nested subqueries",
        suggestion: "Simplify logic using JOIN or CTE.",
        points: 10,
        applies: check_subquery_count,
    },
    Rule {
        category: Category::Scalability,
        message: "GROUP BY with multiple JOINs",
        suggestion: "Aggregation may be expensive.",
        points: 15,
        applies: check_grouped_joins,
    },
];

fn check_select_star(features: &QueryFeatures) -> bool {
    features.select_star
}

fn check_unbounded_scan(features: &QueryFeatures) -> bool {
    !features.has_where && !features.has_limit
}

fn check_unbounded_sort(features: &QueryFeatures) -> bool {
    features.has_order_by && !features.has_limit
}

fn check_join_count(features: &QueryFeatures) -> bool {
    features.join_count > 3
}

fn check_subquery_count(features: &QueryFeatures) -> bool {
    features.subquery_count > 2
}

fn check_grouped_joins(features: &QueryFeatures) -> bool {
    features.has_group_by && features.join_count > 2
}
