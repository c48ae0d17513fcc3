//! Assembly of a single object's page.
//!
//! A renderer wraps its object in an [`ObjectComposer`], switches on the
//! optional parts it wants (events, pod/job template, conditions, plugin status),
//! registers its own configuration, status and layout items, and finally calls
//! [`ObjectComposer::to_component`]. Every step of the assembly is fail-fast
//! except events, which degrade to an inline error panel.

mod conditions;
mod events;
mod template;

use k8s_openapi::api::batch::v1::JobTemplateSpec;
use k8s_openapi::api::core::v1::PodTemplateSpec;
use tracing::{debug, warn, Span};

use crate::component::{
    Component, ErrorPanel, FlexLayout, FlexLayoutItem, Summary, SummarySection, WIDTH_FULL,
    WIDTH_HALF,
};
use crate::context::RenderContext;
use crate::error::{BoxError, Collaborator, PrintError};
use crate::object::Object;
use crate::options::Options;
use crate::ports::TemplatePayload;

pub use conditions::conditions_table;
pub use events::events_table;
pub use template::{render_template, BasicTemplateRenderer};

pub type EventsGenerator<'a> =
    Box<dyn Fn(&RenderContext, &dyn Object, &Options) -> Result<Component, PrintError> + 'a>;

pub type TemplateGenerator<'a> = Box<
    dyn Fn(&RenderContext, &dyn Object, &TemplatePayload, &Options) -> Result<FlexLayout, PrintError>
        + 'a,
>;

pub type ConditionsFn<'a> = Box<
    dyn Fn(&RenderContext, &dyn Object, &Options) -> Result<Option<Component>, PrintError> + 'a,
>;

/// How the trailing conditions section is produced.
pub enum ConditionsGenerator<'a> {
    /// Table built from `status.conditions`, when the object has any.
    Default,
    Custom(ConditionsFn<'a>),
    Disabled,
}

type ItemFn<'a> = Box<dyn FnOnce() -> Result<Option<Component>, BoxError> + 'a>;

/// A deferred piece of the layout and the width it wants.
pub struct ItemDescriptor<'a> {
    width: u16,
    func: ItemFn<'a>,
}

impl<'a> ItemDescriptor<'a> {
    /// `func` returning `Ok(None)` leaves the item out of the layout.
    pub fn new<F>(width: u16, func: F) -> Self
    where
        F: FnOnce() -> Result<Option<Component>, BoxError> + 'a,
    {
        Self {
            width,
            func: Box::new(func),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }
}

pub struct ObjectComposer<'a> {
    object: Option<&'a dyn Object>,
    config: Vec<SummarySection>,
    status: Option<Summary>,
    events_enabled: bool,
    plugin_status_enabled: bool,
    template: Option<TemplatePayload>,
    conditions: ConditionsGenerator<'a>,
    items: Vec<Vec<ItemDescriptor<'a>>>,
    events_gen: EventsGenerator<'a>,
    template_gen: TemplateGenerator<'a>,
}

impl<'a> ObjectComposer<'a> {
    pub fn new(object: &'a dyn Object) -> Self {
        Self::from_optional(Some(object))
    }

    /// Composer for an object that may be missing; finalizing it without one fails.
    pub fn from_optional(object: Option<&'a dyn Object>) -> Self {
        Self {
            object,
            config: Vec::new(),
            status: None,
            events_enabled: false,
            plugin_status_enabled: false,
            template: None,
            conditions: ConditionsGenerator::Default,
            items: Vec::new(),
            events_gen: Box::new(events_table),
            template_gen: Box::new(render_template),
        }
    }

    pub fn enable_events(&mut self) {
        self.events_enabled = true;
    }

    pub fn enable_plugin_status(&mut self) {
        self.plugin_status_enabled = true;
    }

    pub fn enable_pod_template(&mut self, template: PodTemplateSpec) {
        self.template = Some(TemplatePayload::Pod(template));
    }

    pub fn enable_job_template(&mut self, template: JobTemplateSpec) {
        self.template = Some(TemplatePayload::Job(template));
    }

    pub fn disable_conditions(&mut self) {
        self.conditions = ConditionsGenerator::Disabled;
    }

    pub fn set_conditions_generator<F>(&mut self, f: F)
    where
        F: Fn(&RenderContext, &dyn Object, &Options) -> Result<Option<Component>, PrintError> + 'a,
    {
        self.conditions = ConditionsGenerator::Custom(Box::new(f));
    }

    pub fn set_events_generator<F>(&mut self, f: F)
    where
        F: Fn(&RenderContext, &dyn Object, &Options) -> Result<Component, PrintError> + 'a,
    {
        self.events_gen = Box::new(f);
    }

    pub fn set_template_generator<F>(&mut self, f: F)
    where
        F: Fn(&RenderContext, &dyn Object, &TemplatePayload, &Options) -> Result<FlexLayout, PrintError>
            + 'a,
    {
        self.template_gen = Box::new(f);
    }

    /// Append to the "Configuration" summary. Repeated calls accumulate.
    pub fn register_config(&mut self, summary: Summary) {
        self.config.extend(summary.sections);
    }

    /// Set the "Status" summary. The last call wins.
    pub fn register_summary(&mut self, summary: Summary) {
        self.status = Some(Summary {
            title: Some("Status".to_string()),
            sections: summary.sections,
        });
    }

    /// Items passed together end up side by side in one section; each call
    /// starts a new section.
    pub fn register_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = ItemDescriptor<'a>>,
    {
        let group: Vec<_> = items.into_iter().collect();
        if !group.is_empty() {
            self.items.push(group);
        }
    }

    /// Assemble the page: configuration and status, template, events,
    /// registered items, plugin items, then conditions.
    #[tracing::instrument(skip_all, fields(kind = tracing::field::Empty, name = tracing::field::Empty))]
    pub fn to_component(
        self,
        ctx: &RenderContext,
        options: &Options,
    ) -> Result<FlexLayout, PrintError> {
        let ObjectComposer {
            object,
            config,
            status,
            events_enabled,
            plugin_status_enabled,
            template,
            conditions,
            items,
            events_gen,
            template_gen,
        } = self;

        let Some(object) = object else {
            return Err(PrintError::NilInput("object"));
        };
        Span::current()
            .record("kind", object.kind())
            .record("name", object.name());

        let contribution = options
            .plugins
            .contribution(ctx, object)
            .map_err(PrintError::collaborator(Collaborator::Plugins))?;

        let mut layout = FlexLayout::new("Summary");

        let mut configuration = Summary::new("Configuration");
        configuration.sections.extend(config);
        configuration.sections.extend(contribution.config);
        let mut header = vec![FlexLayoutItem::new(WIDTH_HALF, configuration)];

        let mut status = status;
        if plugin_status_enabled && !contribution.status.is_empty() {
            status
                .get_or_insert_with(|| Summary::new("Status"))
                .sections
                .extend(contribution.status);
        }
        if let Some(status) = status {
            header.push(FlexLayoutItem::new(WIDTH_HALF, status));
        }
        layout.add_section(header);

        if let Some(template) = &template {
            let view = template_gen(ctx, object, template, options)?;
            layout.add_section(vec![FlexLayoutItem::new(WIDTH_FULL, view)]);
        }

        if events_enabled {
            let view = events_gen(ctx, object, options).unwrap_or_else(|err| {
                warn!(error = %err, "unable to load events");
                ErrorPanel {
                    title: "Events".to_string(),
                    message: err.to_string(),
                }
                .into()
            });
            layout.add_section(vec![FlexLayoutItem::new(WIDTH_FULL, view)]);
        }

        for (section, group) in items.into_iter().enumerate() {
            let mut row = Vec::with_capacity(group.len());
            for (item, descriptor) in group.into_iter().enumerate() {
                match (descriptor.func)() {
                    Ok(Some(view)) => row.push(FlexLayoutItem {
                        width: descriptor.width,
                        view,
                    }),
                    Ok(None) => debug!(section, item, "layout item is empty"),
                    Err(source) => {
                        return Err(PrintError::Fragment {
                            section,
                            item,
                            source,
                        })
                    }
                }
            }
            layout.add_section(row);
        }

        layout.add_section(contribution.items);

        let conditions = match conditions {
            ConditionsGenerator::Default => conditions_table(ctx, object, options)?,
            ConditionsGenerator::Custom(f) => f(ctx, object, options)?,
            ConditionsGenerator::Disabled => None,
        };
        if let Some(view) = conditions {
            layout.add_section(vec![FlexLayoutItem::new(WIDTH_FULL, view)]);
        }

        Ok(layout)
    }
}
