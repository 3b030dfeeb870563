//! Conjunctive filter builder for parameterized queries.
//!
//! Every query tool follows the same construction: for each present
//! filter argument, append one predicate and its positional parameter(s)
//! in matching order, then compose a single WHERE clause only if any
//! predicate was appended.

use rusqlite::types::ToSql;

/// An ordered list of AND-ed predicates and their positional parameters.
#[derive(Default)]
pub struct FilterSet {
    clauses: Vec<String>,
    params: Vec<Box<dyn ToSql + Send>>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a case-insensitive substring match on one column.
    ///
    /// The value is wildcard-wrapped; this is the documented matching
    /// mode for every text filter, not exact equality.
    pub fn like(&mut self, column: &str, value: &str) {
        self.clauses.push(format!("{column} LIKE ?"));
        self.params.push(Box::new(format!("%{value}%")));
    }

    /// Appends a substring match across several columns (OR-ed), counting
    /// as a single conjunctive predicate.
    pub fn like_any(&mut self, columns: &[&str], value: &str) {
        let alternatives: Vec<String> =
            columns.iter().map(|c| format!("{c} LIKE ?")).collect();
        self.clauses.push(format!("({})", alternatives.join(" OR ")));
        for _ in columns {
            self.params.push(Box::new(format!("%{value}%")));
        }
    }

    /// Appends an exact-match predicate.
    pub fn eq<T: ToSql + Send + 'static>(&mut self, column: &str, value: T) {
        self.clauses.push(format!("{column} = ?"));
        self.params.push(Box::new(value));
    }

    /// Appends a lower-bound predicate (`column >= value`).
    pub fn at_least<T: ToSql + Send + 'static>(&mut self, column: &str, value: T) {
        self.clauses.push(format!("{column} >= ?"));
        self.params.push(Box::new(value));
    }

    /// Appends an upper-bound predicate (`column <= value`).
    pub fn at_most<T: ToSql + Send + 'static>(&mut self, column: &str, value: T) {
        self.clauses.push(format!("{column} <= ?"));
        self.params.push(Box::new(value));
    }

    /// Whether any predicate has been appended.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The composed `WHERE` clause, or the empty string when no filter
    /// is present (all rows considered).
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Positional parameters, in predicate order.
    pub fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref() as &dyn ToSql).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_where_clause() {
        let f = FilterSet::new();
        assert!(f.is_empty());
        assert_eq!(f.where_clause(), "");
        assert!(f.params().is_empty());
    }

    #[test]
    fn single_like_predicate() {
        let mut f = FilterSet::new();
        f.like("p.name", "kohli");
        assert_eq!(f.where_clause(), "WHERE p.name LIKE ?");
        assert_eq!(f.params().len(), 1);
    }

    #[test]
    fn predicates_join_with_and_in_order() {
        let mut f = FilterSet::new();
        f.eq("m.id", "335982".to_string());
        f.eq("m.season", 2008i64);
        f.like("m.venue", "Chinnaswamy");
        assert_eq!(
            f.where_clause(),
            "WHERE m.id = ? AND m.season = ? AND m.venue LIKE ?"
        );
        assert_eq!(f.params().len(), 3);
    }

    #[test]
    fn like_any_binds_one_param_per_column() {
        let mut f = FilterSet::new();
        f.like_any(&["m.team1", "m.team2"], "Mumbai");
        assert_eq!(f.where_clause(), "WHERE (m.team1 LIKE ? OR m.team2 LIKE ?)");
        assert_eq!(f.params().len(), 2);
    }

    #[test]
    fn range_predicates() {
        let mut f = FilterSet::new();
        f.at_least("d.over", 5i64);
        f.at_most("d.over", 10i64);
        assert_eq!(f.where_clause(), "WHERE d.over >= ? AND d.over <= ?");
    }
}
