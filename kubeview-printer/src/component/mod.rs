//! View components produced by the printers.
//!
//! The tree is handed to a separate serialization layer; nothing here decides
//! how it is put on the wire.

mod layout;
mod table;

use std::collections::BTreeMap;

use jiff::Timestamp as Instant;
use serde::Serialize;

pub use layout::{
    FlexLayout, FlexLayoutItem, FlexLayoutSection, Summary, SummarySection, WIDTH_FULL,
    WIDTH_HALF, WIDTH_QUARTER,
};
pub use table::{
    Confirmation, GridAction, GridActionKind, SortOrder, Table, TableCol, TableFilter, TableRow,
};

use crate::utils::pad_key;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "config", rename_all = "camelCase")]
pub enum Component {
    Text(Text),
    Link(Link),
    Timestamp(Timestamp),
    Labels(Labels),
    Table(Table),
    Summary(Summary),
    FlexLayout(FlexLayout),
    Error(ErrorPanel),
}

impl Component {
    pub fn text(value: impl Into<String>) -> Self {
        Component::Text(Text::new(value))
    }

    /// Key used when a table is sorted on the column holding this component.
    pub fn sort_key(&self) -> String {
        match self {
            Component::Text(t) => t.value.clone(),
            Component::Link(l) => l.text.clone(),
            Component::Timestamp(t) => pad_key(t.epoch.max(0) as usize),
            Component::Labels(l) => l
                .labels
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(","),
            Component::Table(t) => t.title.clone(),
            Component::Summary(s) => s.title.clone().unwrap_or_default(),
            Component::FlexLayout(f) => f.title.clone(),
            Component::Error(e) => e.message.clone(),
        }
    }

    /// Attach a status badge. Only text and links carry one; returns whether it stuck.
    pub fn set_status(&mut self, status: ObjectStatus) -> bool {
        match self {
            Component::Text(t) => {
                t.status = Some(status);
                true
            }
            Component::Link(l) => {
                l.status = Some(status);
                true
            }
            _ => false,
        }
    }

    pub fn status(&self) -> Option<&ObjectStatus> {
        match self {
            Component::Text(t) => t.status.as_ref(),
            Component::Link(l) => l.status.as_ref(),
            _ => None,
        }
    }
}

impl From<Text> for Component {
    fn from(t: Text) -> Self {
        Component::Text(t)
    }
}

impl From<Link> for Component {
    fn from(l: Link) -> Self {
        Component::Link(l)
    }
}

impl From<Table> for Component {
    fn from(t: Table) -> Self {
        Component::Table(t)
    }
}

impl From<Summary> for Component {
    fn from(s: Summary) -> Self {
        Component::Summary(s)
    }
}

impl From<FlexLayout> for Component {
    fn from(f: FlexLayout) -> Self {
        Component::FlexLayout(f)
    }
}

impl From<ErrorPanel> for Component {
    fn from(e: ErrorPanel) -> Self {
        Component::Error(e)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TextStatus {
    Ok,
    Warning,
    Error,
}

/// Badge plus messages shown next to an object's name.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ObjectStatus {
    pub status: TextStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Text {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ObjectStatus>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Link {
    pub text: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ObjectStatus>,
}

impl Link {
    pub fn new(text: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: path.into(),
            status: None,
        }
    }
}

/// Seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Timestamp {
    pub epoch: i64,
}

impl From<Instant> for Timestamp {
    fn from(ts: Instant) -> Self {
        Self {
            epoch: ts.as_second(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Labels {
    pub labels: BTreeMap<String, String>,
}

/// Inline panel shown in place of content that failed to load.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorPanel {
    pub title: String,
    pub message: String,
}
