//! Listing tables where every row is a cluster object.

mod actions;

use std::sync::Arc;

use tracing::debug;

use crate::component::{SortOrder, Table, TableCol, TableFilter, TableRow};
use crate::context::RenderContext;
use crate::error::{Collaborator, PrintError};
use crate::object::{Object, ObjectIdentity};
use crate::ports::PluginPort;

pub use actions::{delete_action, DELETE_ACTION_PATH};

/// Column that receives plugin status badges.
pub const NAME_COLUMN: &str = "Name";

pub struct ObjectTable {
    table: Table,
    plugins: Option<Arc<dyn PluginPort>>,
    sort: Option<SortOrder>,
}

impl ObjectTable {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>, columns: Vec<TableCol>) -> Self {
        Self {
            table: Table::new(title, placeholder, columns),
            plugins: None,
            sort: None,
        }
    }

    /// Decorate each row's name with the status plugins report for its object.
    pub fn enable_plugin_status(&mut self, plugins: Arc<dyn PluginPort>) {
        self.plugins = Some(plugins);
    }

    /// Filters with a name already present replace the old one.
    pub fn add_filters<I>(&mut self, filters: I)
    where
        I: IntoIterator<Item = (String, TableFilter)>,
    {
        self.table.filters.extend(filters);
    }

    pub fn set_sort_order(&mut self, column: impl Into<String>, descending: bool) {
        self.sort = Some(SortOrder {
            column: column.into(),
            descending,
        });
    }

    /// Append `row` for `object` with a Delete action attached.
    ///
    /// The row is not appended when the object's identity is incomplete or the
    /// plugin status lookup fails.
    pub fn add_row_for_object(
        &mut self,
        ctx: &RenderContext,
        object: &dyn Object,
        mut row: TableRow,
    ) -> Result<(), PrintError> {
        let id = ObjectIdentity::of(object)?;
        row.add_action(delete_action(&id));

        if let Some(plugins) = &self.plugins {
            let status = plugins
                .object_status(ctx, object)
                .map_err(PrintError::collaborator(Collaborator::Plugins))?;
            if let Some(status) = status {
                let applied = row
                    .get_mut(NAME_COLUMN)
                    .is_some_and(|cell| cell.set_status(status));
                if !applied {
                    debug!(kind = %id.kind, name = %id.name, "no name cell to carry plugin status");
                }
            }
        }

        self.table.add_row(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.table.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.rows.is_empty()
    }

    /// Finished table, sorted if a sort order was set.
    pub fn to_component(mut self) -> Table {
        if let Some(order) = &self.sort {
            self.table.sort(order);
        }
        self.table
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::component::{Component, GridActionKind, Link, ObjectStatus, TextStatus};
    use crate::testing::{unstructured, widget, FakePlugins};

    fn name_row(name: &str) -> TableRow {
        TableRow::new().with(NAME_COLUMN, Link::new(name, format!("/widgets/{name}")))
    }

    fn names(table: &Table) -> Vec<String> {
        table
            .rows
            .iter()
            .map(|r| r.get(NAME_COLUMN).map(Component::sort_key).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let ctx = RenderContext::new();
        let mut table = ObjectTable::new("Widgets", "none", TableCol::list(&["Name"]));
        for name in ["pod2", "pod1", "pod3"] {
            table
                .add_row_for_object(&ctx, &widget("ns", name), name_row(name))
                .unwrap();
        }
        assert_eq!(names(&table.to_component()), ["pod2", "pod1", "pod3"]);
    }

    #[test]
    fn test_sort_order_applied_on_finish() {
        let ctx = RenderContext::new();
        let mut table = ObjectTable::new("Widgets", "none", TableCol::list(&["Name"]));
        table.set_sort_order(NAME_COLUMN, false);
        table
            .add_row_for_object(&ctx, &widget("ns", "pod2"), name_row("pod2"))
            .unwrap();
        table
            .add_row_for_object(&ctx, &widget("ns", "pod1"), name_row("pod1"))
            .unwrap();

        assert_eq!(names(&table.to_component()), ["pod1", "pod2"]);
    }

    #[test]
    fn test_each_row_has_one_delete_action() {
        let ctx = RenderContext::new();
        let mut table = ObjectTable::new("Widgets", "none", TableCol::list(&["Name"]));
        table
            .add_row_for_object(&ctx, &widget("ns", "w1"), name_row("w1"))
            .unwrap();

        let out = table.to_component();
        let actions = &out.rows[0].actions;
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "Delete");
        assert_eq!(actions[0].action_path, DELETE_ACTION_PATH);
        assert_eq!(actions[0].kind, GridActionKind::Danger);
        assert_eq!(
            actions[0].payload,
            BTreeMap::from([
                ("namespace".to_string(), "ns".to_string()),
                ("apiVersion".to_string(), "example.dev/v1".to_string()),
                ("kind".to_string(), "Widget".to_string()),
                ("name".to_string(), "w1".to_string()),
            ])
        );
    }

    #[test]
    fn test_incomplete_identity_rejects_row() {
        let ctx = RenderContext::new();
        let mut table = ObjectTable::new("Things", "none", TableCol::list(&["Name"]));
        let err = table
            .add_row_for_object(&ctx, &unstructured(None, "ns", "thing"), name_row("thing"))
            .unwrap_err();

        assert!(matches!(err, PrintError::MissingIdentity(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_plugin_status_decorates_name() {
        let ctx = RenderContext::new();
        let status = ObjectStatus {
            status: TextStatus::Warning,
            details: vec!["backup overdue".into()],
        };
        let mut table = ObjectTable::new("Widgets", "none", TableCol::list(&["Name"]));
        table.enable_plugin_status(Arc::new(FakePlugins {
            status: Some(status.clone()),
            ..Default::default()
        }));
        table
            .add_row_for_object(&ctx, &widget("ns", "w1"), name_row("w1"))
            .unwrap();

        let out = table.to_component();
        assert_eq!(out.rows[0].get(NAME_COLUMN).and_then(Component::status), Some(&status));
    }

    #[test]
    fn test_plugin_failure_fails_row() {
        let ctx = RenderContext::new();
        let mut table = ObjectTable::new("Widgets", "none", TableCol::list(&["Name"]));
        table.enable_plugin_status(Arc::new(FakePlugins::failing()));

        let err = table
            .add_row_for_object(&ctx, &widget("ns", "w1"), name_row("w1"))
            .unwrap_err();
        assert!(matches!(
            err,
            PrintError::Collaborator {
                collaborator: Collaborator::Plugins,
                ..
            }
        ));
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_filters_replace_by_name() {
        let mut table = ObjectTable::new("Widgets", "none", TableCol::list(&["Name"]));
        let filter = |selected: &str| TableFilter {
            values: vec!["Running".into(), "Pending".into()],
            selected: vec![selected.to_string()],
        };
        table.add_filters([("Status".to_string(), filter("Running"))]);
        table.add_filters([("Status".to_string(), filter("Pending"))]);

        let out = table.to_component();
        assert_eq!(out.filters.len(), 1);
        assert_eq!(out.filters["Status"].selected, ["Pending"]);
    }
}
