use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

use crate::component::{Component, Timestamp};

pub fn pad_key(n: usize) -> String {
    format!("{:020}", n)
}

/// Timestamp cell, or `<unknown>` text when the time was never recorded.
pub fn time_cell(time: Option<&Time>) -> Component {
    match time {
        Some(t) => Component::Timestamp(Timestamp::from(t.0)),
        None => Component::text("<unknown>"),
    }
}

/// Timestamp cell from an RFC 3339 string as found in untyped status blocks.
pub fn time_cell_from_str(raw: Option<&str>) -> Component {
    match raw.and_then(|s| s.parse::<jiff::Timestamp>().ok()) {
        Some(ts) => Component::Timestamp(Timestamp::from(ts)),
        None => Component::text("<unknown>"),
    }
}
