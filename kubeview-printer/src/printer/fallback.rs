use crate::component::{Component, Labels, Table, TableCol, TableRow};
use crate::context::RenderContext;
use crate::error::{Collaborator, PrintError};
use crate::object::Object;
use crate::options::Options;
use crate::utils::time_cell;

/// Generic table for kinds without a dedicated renderer.
#[tracing::instrument(skip_all, fields(kind = object.kind(), name = object.name()))]
pub fn print_default(
    _ctx: &RenderContext,
    object: &dyn Object,
    options: &Options,
) -> Result<Component, PrintError> {
    let title = format!("{}/{}", object.api_version(), object.kind());
    let mut table = Table::new(
        title,
        "We couldn't find any objects!",
        TableCol::list(&["Name", "Labels", "Age"]),
    );

    let meta = object.meta();
    let name = options
        .links
        .for_object(object, object.name())
        .map_err(PrintError::collaborator(Collaborator::Links))?;
    let labels = if options.disable_labels {
        Labels::default()
    } else {
        Labels {
            labels: meta.labels.clone().unwrap_or_default(),
        }
    };

    table.add_row(
        TableRow::new()
            .with("Name", name)
            .with("Labels", Component::Labels(labels))
            .with("Age", time_cell(meta.creation_timestamp.as_ref())),
    );

    Ok(table.into())
}
