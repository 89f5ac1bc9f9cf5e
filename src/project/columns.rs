//! The set of columns to retain in the output.

use crate::error::{ProjectError, ProjectResult};

/// Ordered list of distinct column names to keep.
///
/// Construction enforces the projection contract: at least one name and no
/// duplicates. The order of the names is the order of the output columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    names: Vec<String>,
}

impl ColumnSet {
    /// Build a column set from already-separated names.
    pub fn new<I, S>(names: I) -> ProjectResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(ProjectError::EmptyColumns);
        }

        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ProjectError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Parse comma-separated column lists, e.g. from repeated `-c` flags.
    ///
    /// Whitespace around names is trimmed and empty segments are dropped.
    pub fn parse<I, S>(values: I) -> ProjectResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();

        for value in values {
            for name in value.as_ref().split(',') {
                let name = name.trim();
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }

        Self::new(names)
    }

    /// The column names, in output order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns kept.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// A constructed set is never empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve every name to its index in `headers`.
    ///
    /// Fails with [`ProjectError::MissingColumn`] naming the first column
    /// absent from the header.
    pub fn resolve(&self, headers: &[String]) -> ProjectResult<Vec<usize>> {
        self.names
            .iter()
            .map(|name| {
                headers
                    .iter()
                    .position(|h| h == name)
                    .ok_or_else(|| ProjectError::MissingColumn(name.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_order() {
        let columns = ColumnSet::new(["units", "code"]).unwrap();
        assert_eq!(columns.names(), ["units", "code"]);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = ColumnSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ProjectError::EmptyColumns));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = ColumnSet::new(["code", "units", "code"]).unwrap_err();
        match err {
            ProjectError::DuplicateColumn(name) => assert_eq!(name, "code"),
            other => panic!("expected DuplicateColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_splits_and_trims() {
        let columns = ColumnSet::parse(["code, units", " description "]).unwrap();
        assert_eq!(columns.names(), ["code", "units", "description"]);
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let columns = ColumnSet::parse(["code,,units,"]).unwrap();
        assert_eq!(columns.names(), ["code", "units"]);
    }

    #[test]
    fn test_parse_all_empty_is_rejected() {
        let err = ColumnSet::parse([",,"]).unwrap_err();
        assert!(matches!(err, ProjectError::EmptyColumns));
    }

    #[test]
    fn test_resolve_indices() {
        let headers: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let columns = ColumnSet::new(["c", "a"]).unwrap();

        assert_eq!(columns.resolve(&headers).unwrap(), vec![2, 0]);
    }

    #[test]
    fn test_resolve_missing_column() {
        let headers: Vec<String> = ["code", "description"].iter().map(|s| s.to_string()).collect();
        let columns = ColumnSet::new(["code", "units"]).unwrap();

        let err = columns.resolve(&headers).unwrap_err();
        match err {
            ProjectError::MissingColumn(name) => assert_eq!(name, "units"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }
}
