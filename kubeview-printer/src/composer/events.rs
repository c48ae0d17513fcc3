use jiff::Timestamp as Instant;
use k8s_openapi::api::core::v1::Event;

use crate::component::{
    Component, ObjectStatus, SortOrder, Table, TableCol, TableRow, Text, TextStatus, Timestamp,
};
use crate::context::RenderContext;
use crate::error::{Collaborator, PrintError};
use crate::object::Object;
use crate::options::Options;
use crate::utils::time_cell;

/// Events recorded for `object`, most recent first.
pub fn events_table(
    ctx: &RenderContext,
    object: &dyn Object,
    options: &Options,
) -> Result<Component, PrintError> {
    let events = options
        .events
        .events_for(ctx, object)
        .map_err(PrintError::collaborator(Collaborator::Events))?;

    let mut table = Table::new(
        "Events",
        "There are no events!",
        TableCol::list(&["Message", "Reason", "Type", "Count", "First Seen", "Last Seen"]),
    );
    for ev in &events {
        table.add_row(event_row(ev));
    }
    table.sort(&SortOrder {
        column: "Last Seen".to_string(),
        descending: true,
    });

    Ok(table.into())
}

fn event_row(ev: &Event) -> TableRow {
    let type_ = ev.type_.clone().unwrap_or_default();
    let mut type_cell = Text::new(type_.as_str());
    if type_ == "Warning" {
        type_cell.status = Some(ObjectStatus {
            status: TextStatus::Warning,
            details: Vec::new(),
        });
    }

    let message = ev.message.as_deref().unwrap_or_default().replace('\n', "");

    TableRow::new()
        .with("Message", Component::text(message))
        .with("Reason", Component::text(ev.reason.clone().unwrap_or_default()))
        .with("Type", type_cell)
        .with("Count", Component::text(ev.count.unwrap_or(1).to_string()))
        .with("First Seen", time_cell(ev.first_timestamp.as_ref()))
        .with("Last Seen", last_seen(ev))
}

/// Newer events only fill in the series or event time, older ones only the
/// legacy timestamps.
fn last_seen(ev: &Event) -> Component {
    let ts: Option<Instant> = ev
        .series
        .as_ref()
        .and_then(|s| s.last_observed_time.as_ref().map(|t| t.0))
        .or(ev.event_time.as_ref().map(|t| t.0))
        .or(ev.last_timestamp.as_ref().map(|t| t.0))
        .or(ev.metadata.creation_timestamp.as_ref().map(|t| t.0));

    match ts {
        Some(t) => Component::Timestamp(Timestamp::from(t)),
        None => Component::text("<unknown>"),
    }
}
