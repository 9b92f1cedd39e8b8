//! The ordered list of displayed columns.
//!
//! A [`Selection`] is an immutable value: every edit returns a new one.
//! Names are always columns of the schema it was built against.

use std::fmt;

use tsel_seeker::SeekerError;
use tsel_table::{Column, Schema};

/// The `--select` keyword for "every column in schema order".
pub const ALL: &str = "ALL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// Every column, in schema order.
    pub fn all(schema: &Schema) -> Self {
        Self {
            names: schema.names().map(str::to_string).collect(),
        }
    }

    /// Parses a `--select` value: `ALL`, empty, or a comma separated list.
    ///
    /// Repeated names keep their first position.
    ///
    /// # Errors
    ///
    /// [`SeekerError::UnknownColumn`] for a name the schema lacks.
    pub fn parse(spec: &str, schema: &Schema) -> Result<Self, SeekerError> {
        let spec = spec.trim();
        if spec.is_empty() || spec == ALL {
            return Ok(Self::all(schema));
        }

        let mut names: Vec<String> = Vec::new();
        for name in spec.split(',').map(str::trim) {
            if !schema.contains(name) {
                return Err(SeekerError::unknown_column(name, "--select"));
            }
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Ok(Self { names })
    }

    /// Selected names in display order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Selected names followed by the unselected ones in schema order.
    ///
    /// This is the list the column pickers walk.
    pub fn all_columns(&self, schema: &Schema) -> Vec<String> {
        let mut all = self.names.clone();
        all.extend(
            schema
                .names()
                .filter(|name| !self.contains(name))
                .map(str::to_string),
        );
        all
    }

    /// Columns to draw. An empty selection shows every column.
    pub fn resolve<'s>(&self, schema: &'s Schema) -> Vec<&'s Column> {
        if self.names.is_empty() {
            return schema.columns().iter().collect();
        }
        self.names.iter().filter_map(|name| schema.get(name)).collect()
    }

    /// Removes `name` if selected, appends it otherwise.
    pub fn toggled(&self, name: &str) -> Self {
        let mut names = self.names.clone();
        match names.iter().position(|n| n == name) {
            Some(index) => {
                names.remove(index);
            }
            None => names.push(name.to_string()),
        }
        Self { names }
    }

    /// Swaps the name at `index` with the one before it.
    ///
    /// Out of range positions leave the selection unchanged.
    pub fn moved_up(&self, index: usize) -> Self {
        let mut names = self.names.clone();
        if index > 0 && index < names.len() {
            names.swap(index - 1, index);
        }
        Self { names }
    }

    /// Swaps the name at `index` with the one after it.
    pub fn moved_down(&self, index: usize) -> Self {
        let mut names = self.names.clone();
        if index + 1 < names.len() {
            names.swap(index, index + 1);
        }
        Self { names }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::from_spans([("A", 0, 3), ("B", 3, 6), ("C", 6, 9)]).unwrap()
    }

    fn names(selection: &Selection) -> Vec<&str> {
        selection.names().iter().map(String::as_str).collect()
    }

    #[test]
    fn parse_all_and_empty() {
        let schema = schema();
        assert_eq!(Selection::parse("ALL", &schema).unwrap(), Selection::all(&schema));
        assert_eq!(Selection::parse("", &schema).unwrap(), Selection::all(&schema));
    }

    #[test]
    fn parse_list_trims_and_dedups() {
        let selection = Selection::parse("C, A,C", &schema()).unwrap();
        assert_eq!(names(&selection), vec!["C", "A"]);
        assert_eq!(selection.to_string(), "C,A");
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = Selection::parse("A,Z", &schema()).unwrap_err();
        assert_eq!(err, SeekerError::unknown_column("Z", "--select"));
    }

    #[test]
    fn all_columns_puts_selected_first() {
        let selection = Selection::parse("C", &schema()).unwrap();
        assert_eq!(selection.all_columns(&schema()), vec!["C", "A", "B"]);
    }

    #[test]
    fn toggle_removes_or_appends() {
        let selection = Selection::parse("A,B", &schema()).unwrap();
        assert_eq!(names(&selection.toggled("A")), vec!["B"]);
        assert_eq!(names(&selection.toggled("C")), vec!["A", "B", "C"]);
        // The original is untouched.
        assert_eq!(names(&selection), vec!["A", "B"]);
    }

    #[test]
    fn moves_stay_in_bounds() {
        let selection = Selection::all(&schema());
        assert_eq!(names(&selection.moved_up(1)), vec!["B", "A", "C"]);
        assert_eq!(names(&selection.moved_up(0)), vec!["A", "B", "C"]);
        assert_eq!(names(&selection.moved_down(1)), vec!["A", "C", "B"]);
        assert_eq!(names(&selection.moved_down(2)), vec!["A", "B", "C"]);
        assert_eq!(names(&selection.moved_up(7)), vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_selection_resolves_to_everything() {
        let schema = schema();
        let empty = Selection::default();
        let resolved: Vec<&str> = empty.resolve(&schema).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(resolved, vec!["A", "B", "C"]);
    }
}
