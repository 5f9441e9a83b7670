use serde::Serialize;

/// Which dimension of query health a risk affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Performance,
    Scalability,
    Maintainability,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Performance => write!(f, "Performance"),
            Category::Scalability => write!(f, "Scalability"),
            Category::Maintainability => write!(f, "Maintainability"),
        }
    }
}

/// Letter grade summarizing the total risk score, A (best) through F (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a total score onto a grade. Thresholds are checked lowest first.
    pub fn from_score(score: u32) -> Grade {
        if score < 20 {
            Grade::A
        } else if score < 40 {
            Grade::B
        } else if score < 60 {
            Grade::C
        } else if score < 80 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// A single detected pattern in a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Risk {
    /// Dimension this risk counts against
    pub category: Category,
    /// Human-readable description of what was detected
    pub message: String,
    /// Remediation hint
    pub suggestion: String,
}

/// Per-category sub-scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub performance_score: u32,
    pub scalability_score: u32,
    pub maintainability_score: u32,
}

impl Breakdown {
    /// Credit `points` to the bucket for `category`.
    pub fn add(&mut self, category: Category, points: u32) {
        match category {
            Category::Performance => self.performance_score += points,
            Category::Scalability => self.scalability_score += points,
            Category::Maintainability => self.maintainability_score += points,
        }
    }

    pub fn total(&self) -> u32 {
        self.performance_score + self.scalability_score + self.maintainability_score
    }
}

/// Complete report for one analyzed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Sum of all breakdown buckets
    pub total_score: u32,
    /// Grade derived from `total_score`
    pub grade: Grade,
    /// Category sub-scores
    pub breakdown: Breakdown,
    /// Detected risks, in rule order
    pub risks: Vec<Risk>,
}

impl AnalysisResult {
    /// Assemble a result from a finished breakdown, deriving total and grade.
    pub fn new(breakdown: Breakdown, risks: Vec<Risk>) -> Self {
        let total_score = breakdown.total();
        Self {
            total_score,
            grade: Grade::from_score(total_score),
            breakdown,
            risks,
        }
    }
}
