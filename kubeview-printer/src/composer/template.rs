use k8s_openapi::api::core::v1::{Container, PodTemplateSpec};

use crate::component::{
    Component, FlexLayout, FlexLayoutItem, Labels, Summary, Table, TableCol, TableRow, WIDTH_FULL,
    WIDTH_HALF,
};
use crate::context::RenderContext;
use crate::error::{BoxError, Collaborator, PrintError};
use crate::object::Object;
use crate::options::Options;
use crate::ports::{TemplatePayload, TemplateRenderer};

/// Render `template` through the configured [`TemplateRenderer`].
pub fn render_template(
    ctx: &RenderContext,
    parent: &dyn Object,
    template: &TemplatePayload,
    options: &Options,
) -> Result<FlexLayout, PrintError> {
    options
        .templates
        .render(ctx, parent, template, options)
        .map_err(PrintError::collaborator(Collaborator::Templates))
}

/// Template view with the template's labels and a table of its containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTemplateRenderer;

impl TemplateRenderer for BasicTemplateRenderer {
    fn render(
        &self,
        ctx: &RenderContext,
        _parent: &dyn Object,
        template: &TemplatePayload,
        options: &Options,
    ) -> Result<FlexLayout, BoxError> {
        ctx.check_cancelled()?;

        let mut summary = Summary::new("Template");
        let (title, pod) = match template {
            TemplatePayload::Pod(pod) => ("Pod Template", Some(pod)),
            TemplatePayload::Job(job) => {
                let spec = job.spec.as_ref();
                if let Some(completions) = spec.and_then(|s| s.completions) {
                    summary.add("Completions", Component::text(completions.to_string()));
                }
                if let Some(parallelism) = spec.and_then(|s| s.parallelism) {
                    summary.add("Parallelism", Component::text(parallelism.to_string()));
                }
                ("Job Template", spec.map(|s| &s.template))
            }
        };

        if !options.disable_labels {
            summary.add("Labels", Component::Labels(template_labels(pod)));
        }

        let mut layout = FlexLayout::new(title);
        if !summary.is_empty() {
            layout.add_section(vec![FlexLayoutItem::new(WIDTH_HALF, summary)]);
        }

        let containers = pod
            .and_then(|p| p.spec.as_ref())
            .map(|s| s.containers.as_slice())
            .unwrap_or_default();
        layout.add_section(vec![FlexLayoutItem::new(WIDTH_FULL, containers_table(containers))]);

        Ok(layout)
    }
}

fn template_labels(pod: Option<&PodTemplateSpec>) -> Labels {
    Labels {
        labels: pod
            .and_then(|p| p.metadata.as_ref())
            .and_then(|m| m.labels.clone())
            .unwrap_or_default(),
    }
}

fn containers_table(containers: &[Container]) -> Table {
    let mut table = Table::new(
        "Containers",
        "There are no containers!",
        TableCol::list(&["Name", "Image", "Command", "Ports"]),
    );
    for c in containers {
        let ports = c
            .ports
            .iter()
            .flatten()
            .map(|p| format!("{}/{}", p.container_port, p.protocol.as_deref().unwrap_or("TCP")))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(
            TableRow::new()
                .with("Name", Component::text(c.name.as_str()))
                .with("Image", Component::text(c.image.clone().unwrap_or_default()))
                .with("Command", Component::text(c.command.as_deref().unwrap_or_default().join(" ")))
                .with("Ports", Component::text(ports)),
        );
    }
    table
}
