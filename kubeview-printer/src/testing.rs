//! Fixtures shared by the unit tests.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{Event, ObjectReference};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::serde_json::{json, Value};
use kube::api::DynamicObject;
use kube::core::TypeMeta;

use crate::component::{FlexLayout, FlexLayoutItem, ObjectStatus, SummarySection, WIDTH_FULL};
use crate::context::RenderContext;
use crate::error::BoxError;
use crate::object::{Object, Unstructured};
use crate::options::Options;
use crate::ports::{EventSource, PluginContribution, PluginPort, TemplatePayload, TemplateRenderer};

/// Namespaced custom kind.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Widget {
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

impl k8s_openapi::Resource for Widget {
    const API_VERSION: &'static str = "example.dev/v1";
    const GROUP: &'static str = "example.dev";
    const KIND: &'static str = "Widget";
    const VERSION: &'static str = "v1";
    const URL_PATH_SEGMENT: &'static str = "widgets";
    type Scope = k8s_openapi::NamespaceResourceScope;
}

impl k8s_openapi::Metadata for Widget {
    type Ty = ObjectMeta;

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

pub fn widget(namespace: &str, name: &str) -> Widget {
    Widget {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        status: None,
    }
}

pub fn widget_with_labels(namespace: &str, name: &str, labels: &[(&str, &str)]) -> Widget {
    let mut w = widget(namespace, name);
    w.metadata.labels = Some(
        labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    );
    w
}

pub fn widget_with_conditions(namespace: &str, name: &str) -> Widget {
    let mut w = widget(namespace, name);
    w.status = Some(json!({
        "conditions": [
            {
                "type": "Ready",
                "status": "True",
                "reason": "Reconciled",
                "message": "all good",
                "lastTransitionTime": "2024-01-01T00:00:00Z"
            },
            {
                "type": "Degraded",
                "status": "False"
            }
        ]
    }));
    w
}

pub fn unstructured(types: Option<(&str, &str)>, namespace: &str, name: &str) -> Unstructured {
    Unstructured(DynamicObject {
        types: types.map(|(api_version, kind)| TypeMeta {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
        }),
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: json!({}),
    })
}

pub fn event(reason: &str, message: &str) -> Event {
    Event {
        reason: Some(reason.to_string()),
        message: Some(message.to_string()),
        type_: Some("Normal".to_string()),
        count: Some(1),
        involved_object: ObjectReference::default(),
        ..Default::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakePlugins {
    pub contribution: PluginContribution,
    pub status: Option<ObjectStatus>,
    pub fail: bool,
}

impl FakePlugins {
    pub fn with_config(header: &str, value: &str) -> Self {
        Self {
            contribution: PluginContribution {
                config: vec![SummarySection::new(header, crate::component::Component::text(value))],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl PluginPort for FakePlugins {
    fn contribution(
        &self,
        ctx: &RenderContext,
        _object: &dyn Object,
    ) -> Result<PluginContribution, BoxError> {
        ctx.check_cancelled()?;
        if self.fail {
            return Err("plugin crashed".into());
        }
        Ok(self.contribution.clone())
    }

    fn object_status(
        &self,
        ctx: &RenderContext,
        _object: &dyn Object,
    ) -> Result<Option<ObjectStatus>, BoxError> {
        ctx.check_cancelled()?;
        if self.fail {
            return Err("plugin crashed".into());
        }
        Ok(self.status.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeEvents {
    pub events: Vec<Event>,
    pub fail: bool,
}

impl EventSource for FakeEvents {
    fn events_for(&self, ctx: &RenderContext, _object: &dyn Object) -> Result<Vec<Event>, BoxError> {
        ctx.check_cancelled()?;
        if self.fail {
            return Err("event store unavailable".into());
        }
        Ok(self.events.clone())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeTemplates;

impl TemplateRenderer for FakeTemplates {
    fn render(
        &self,
        _ctx: &RenderContext,
        parent: &dyn Object,
        template: &TemplatePayload,
        _options: &Options,
    ) -> Result<FlexLayout, BoxError> {
        let label = match template {
            TemplatePayload::Pod(_) => "pod",
            TemplatePayload::Job(_) => "job",
        };
        let mut layout = FlexLayout::new(format!("{label} template"));
        layout.add_section(vec![FlexLayoutItem::new(
            WIDTH_FULL,
            crate::component::Component::text(parent.name()),
        )]);
        Ok(layout)
    }
}
