use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Please enter a query.")]
    EmptyQuery,

    #[error("Failed to read query from {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Where the raw query text comes from.
#[derive(Debug, Clone)]
pub enum QuerySource {
    /// Text passed directly on the command line
    Inline(String),
    /// A file containing the query
    File(PathBuf),
    /// Standard input, read to EOF
    Stdin,
}

impl QuerySource {
    /// Pick the source from CLI arguments. Text wins over a file; with
    /// neither, fall back to stdin.
    pub fn from_args(query: Option<String>, file: Option<PathBuf>) -> Self {
        match (query, file) {
            (Some(text), _) => QuerySource::Inline(text),
            (None, Some(path)) => QuerySource::File(path),
            (None, None) => QuerySource::Stdin,
        }
    }

    pub fn name(&self) -> String {
        match self {
            QuerySource::Inline(_) => "argument".to_string(),
            QuerySource::File(path) => path.display().to_string(),
            QuerySource::Stdin => "stdin".to_string(),
        }
    }
}

/// Read the raw, untouched query text from its source.
#[instrument(skip(source), fields(from = %source.name()))]
pub fn read_query(source: &QuerySource) -> Result<String, InputError> {
    let text = match source {
        QuerySource::Inline(text) => text.clone(),
        QuerySource::File(path) => read_file(path)?,
        QuerySource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| InputError::Read {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            buf
        }
    };
    debug!(bytes = text.len(), "read query text");
    Ok(text)
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        source_name: path.display().to_string(),
        source,
    })
}

/// Trim the query and reject it if nothing is left.
///
/// Used before a full report; the inline summary skips this guard.
pub fn require_query(raw: &str) -> Result<&str, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyQuery);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_prefers_inline_text() {
        let source = QuerySource::from_args(
            Some("SELECT 1".to_string()),
            Some(PathBuf::from("query.sql")),
        );
        assert!(matches!(source, QuerySource::Inline(ref t) if t == "SELECT 1"));
    }

    #[test]
    fn test_source_falls_back_to_stdin() {
        assert!(matches!(QuerySource::from_args(None, None), QuerySource::Stdin));
    }

    #[test]
    fn test_read_inline_is_untouched() {
        let source = QuerySource::Inline("  SELECT 1  ".to_string());
        assert_eq!(read_query(&source).unwrap(), "  SELECT 1  ");
    }

    #[test]
    fn test_read_from_file() {
        let path = std::env::temp_dir().join("sql_risk_test_query.sql");
        std::fs::write(&path, "SELECT * FROM t\n").unwrap();
        let text = read_query(&QuerySource::File(path.clone())).unwrap();
        assert_eq!(text, "SELECT * FROM t\n");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_missing_file_names_the_path() {
        let path = std::env::temp_dir().join("sql_risk_missing_query.sql");
        let err = read_query(&QuerySource::File(path.clone())).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("sql_risk_missing_query.sql"));
    }

    #[test]
    fn test_require_query_trims() {
        assert_eq!(require_query("\n  SELECT 1 \t").unwrap(), "SELECT 1");
    }

    #[test]
    fn test_require_query_rejects_blank() {
        assert!(matches!(require_query(""), Err(InputError::EmptyQuery)));
        let err = require_query(" \n\t ").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a query.");
    }
}
