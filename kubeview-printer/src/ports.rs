//! Collaborators the printing core calls out to.
//!
//! All of them are synchronous and own their own concurrency safety; the core
//! forwards the request's [`RenderContext`] untouched.

use k8s_openapi::api::batch::v1::JobTemplateSpec;
use k8s_openapi::api::core::v1::{Event, PodTemplateSpec};

use crate::component::{FlexLayout, FlexLayoutItem, Link, ObjectStatus, SummarySection};
use crate::context::RenderContext;
use crate::error::BoxError;
use crate::object::{Object, ObjectIdentity};
use crate::options::Options;

/// What the plugin manager adds to an object's page.
#[derive(Debug, Clone, Default)]
pub struct PluginContribution {
    pub config: Vec<SummarySection>,
    pub status: Vec<SummarySection>,
    pub items: Vec<FlexLayoutItem>,
}

pub trait PluginPort: Send + Sync {
    /// Extra content for an object's page.
    fn contribution(
        &self,
        ctx: &RenderContext,
        object: &dyn Object,
    ) -> Result<PluginContribution, BoxError>;

    /// Status badge for an object's row in a listing, if any plugin reports one.
    fn object_status(
        &self,
        ctx: &RenderContext,
        object: &dyn Object,
    ) -> Result<Option<ObjectStatus>, BoxError>;
}

/// Plugin port used when no plugin manager is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlugins;

impl PluginPort for NoPlugins {
    fn contribution(
        &self,
        _ctx: &RenderContext,
        _object: &dyn Object,
    ) -> Result<PluginContribution, BoxError> {
        Ok(PluginContribution::default())
    }

    fn object_status(
        &self,
        _ctx: &RenderContext,
        _object: &dyn Object,
    ) -> Result<Option<ObjectStatus>, BoxError> {
        Ok(None)
    }
}

pub trait LinkGenerator: Send + Sync {
    fn for_gvk(
        &self,
        namespace: &str,
        api_version: &str,
        kind: &str,
        name: &str,
        text: &str,
    ) -> Result<Link, BoxError>;

    fn for_object(&self, object: &dyn Object, text: &str) -> Result<Link, BoxError> {
        let id = ObjectIdentity::of(object)?;
        self.for_gvk(&id.namespace, &id.api_version, &id.kind, &id.name, text)
    }
}

/// Builds dashboard paths of the form
/// `/overview/namespace/{ns}/{apiVersion}/{kind}/{name}`; cluster scoped
/// resources live under `/cluster-overview`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLinks;

impl LinkGenerator for PathLinks {
    fn for_gvk(
        &self,
        namespace: &str,
        api_version: &str,
        kind: &str,
        name: &str,
        text: &str,
    ) -> Result<Link, BoxError> {
        if kind.is_empty() || name.is_empty() {
            return Err(format!("cannot link to {kind:?} named {name:?}").into());
        }
        let path = if namespace.is_empty() {
            format!("/cluster-overview/{api_version}/{kind}/{name}")
        } else {
            format!("/overview/namespace/{namespace}/{api_version}/{kind}/{name}")
        };
        Ok(Link::new(text, path))
    }
}

pub trait EventSource: Send + Sync {
    fn events_for(&self, ctx: &RenderContext, object: &dyn Object) -> Result<Vec<Event>, BoxError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvents;

impl EventSource for NoEvents {
    fn events_for(
        &self,
        _ctx: &RenderContext,
        _object: &dyn Object,
    ) -> Result<Vec<Event>, BoxError> {
        Ok(Vec::new())
    }
}

/// Template embedded in a workload.
#[derive(Debug, Clone)]
pub enum TemplatePayload {
    Pod(PodTemplateSpec),
    Job(JobTemplateSpec),
}

pub trait TemplateRenderer: Send + Sync {
    fn render(
        &self,
        ctx: &RenderContext,
        parent: &dyn Object,
        template: &TemplatePayload,
        options: &Options,
    ) -> Result<FlexLayout, BoxError>;
}
