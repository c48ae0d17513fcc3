use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use super::Component;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TableCol {
    pub name: String,
    pub accessor: String,
}

impl TableCol {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            accessor: name.clone(),
            name,
        }
    }

    pub fn list(names: &[&str]) -> Vec<Self> {
        names.iter().map(|n| Self::new(*n)).collect()
    }
}

/// Selectable filter offered above a table.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TableFilter {
    pub values: Vec<String>,
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GridActionKind {
    Primary,
    Danger,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub body: String,
}

/// Row-level action (e.g. Delete).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GridAction {
    pub name: String,
    pub action_path: String,
    pub payload: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
    pub kind: GridActionKind,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TableRow {
    pub cells: BTreeMap<String, Component>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<GridAction>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, cell: impl Into<Component>) -> Self {
        self.insert(column, cell);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, cell: impl Into<Component>) {
        self.cells.insert(column.into(), cell.into());
    }

    pub fn get(&self, column: &str) -> Option<&Component> {
        self.cells.get(column)
    }

    pub fn get_mut(&mut self, column: &str) -> Option<&mut Component> {
        self.cells.get_mut(column)
    }

    pub fn add_action(&mut self, action: GridAction) {
        self.actions.push(action);
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SortOrder {
    pub column: String,
    pub descending: bool,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Table {
    pub title: String,
    pub columns: Vec<TableCol>,
    pub rows: Vec<TableRow>,
    pub placeholder: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, TableFilter>,
}

impl Table {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>, columns: Vec<TableCol>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
            placeholder: placeholder.into(),
            filters: BTreeMap::new(),
        }
    }

    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Stable sort on one column; rows missing the column sort as empty.
    pub fn sort(&mut self, order: &SortOrder) {
        self.rows.sort_by(|a, b| {
            let a_val = a.get(&order.column).map(Component::sort_key).unwrap_or_default();
            let b_val = b.get(&order.column).map(Component::sort_key).unwrap_or_default();
            let cmp: Ordering = a_val.cmp(&b_val);
            if order.descending {
                cmp.reverse()
            } else {
                cmp
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TableRow {
        TableRow::new().with("Name", Component::text(name))
    }

    #[test]
    fn test_sort_descending() {
        let mut table = Table::new("Pods", "none", TableCol::list(&["Name"]));
        table.add_row(named("a"));
        table.add_row(named("c"));
        table.add_row(named("b"));

        table.sort(&SortOrder {
            column: "Name".into(),
            descending: true,
        });

        let names: Vec<_> = table
            .rows
            .iter()
            .map(|r| r.get("Name").map(Component::sort_key).unwrap_or_default())
            .collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_missing_cells_first_and_stable() {
        let mut table = Table::new("Pods", "none", TableCol::list(&["Name", "Node"]));
        table.add_row(named("b"));
        table.add_row(named("a").with("Node", Component::text("n1")));
        table.add_row(named("c"));

        table.sort(&SortOrder {
            column: "Node".into(),
            descending: false,
        });

        let names: Vec<_> = table
            .rows
            .iter()
            .map(|r| r.get("Name").map(Component::sort_key).unwrap_or_default())
            .collect();
        assert_eq!(names, ["b", "c", "a"]);
    }
}
