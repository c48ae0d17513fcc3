use k8s_openapi::serde_json::Value;
use serde_json_path::JsonPath;

use crate::component::{Component, Table, TableCol, TableRow};
use crate::context::RenderContext;
use crate::error::PrintError;
use crate::object::Object;
use crate::options::Options;
use crate::utils::time_cell_from_str;

const CONDITIONS_PATH: &str = "$.status.conditions[*]";

/// Table of `status.conditions`; `None` when the object reports none.
pub fn conditions_table(
    _ctx: &RenderContext,
    object: &dyn Object,
    _options: &Options,
) -> Result<Option<Component>, PrintError> {
    let value = object.to_value()?;
    let path = JsonPath::parse(CONDITIONS_PATH)?;
    let conditions = path.query(&value).all();
    if conditions.is_empty() {
        return Ok(None);
    }

    let mut table = Table::new(
        "Conditions",
        "There are no conditions!",
        TableCol::list(&["Type", "Reason", "Status", "Message", "Last Transition"]),
    );
    for condition in conditions {
        table.add_row(
            TableRow::new()
                .with("Type", field(condition, "type"))
                .with("Reason", field(condition, "reason"))
                .with("Status", field(condition, "status"))
                .with("Message", field(condition, "message"))
                .with(
                    "Last Transition",
                    time_cell_from_str(condition.get("lastTransitionTime").and_then(Value::as_str)),
                ),
        );
    }

    Ok(Some(table.into()))
}

fn field(condition: &Value, key: &str) -> Component {
    Component::text(condition.get(key).and_then(Value::as_str).unwrap_or_default())
}
