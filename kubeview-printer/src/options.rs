use std::fmt;
use std::sync::Arc;

use http::Extensions;

use crate::composer::BasicTemplateRenderer;
use crate::config::PrinterSettings;
use crate::ports::{EventSource, LinkGenerator, NoEvents, NoPlugins, PathLinks, PluginPort, TemplateRenderer};

/// Ambient configuration handed to every renderer.
///
/// Cheap to clone. Accessors the printing core does not use itself (resource
/// store, port forwarder, ...) travel in [`Options::extensions`] keyed by type.
#[derive(Clone)]
pub struct Options {
    pub plugins: Arc<dyn PluginPort>,
    pub links: Arc<dyn LinkGenerator>,
    pub events: Arc<dyn EventSource>,
    pub templates: Arc<dyn TemplateRenderer>,
    pub disable_labels: bool,
    pub extensions: Extensions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            plugins: Arc::new(NoPlugins),
            links: Arc::new(PathLinks),
            events: Arc::new(NoEvents),
            templates: Arc::new(BasicTemplateRenderer),
            disable_labels: false,
            extensions: Extensions::new(),
        }
    }
}

impl Options {
    pub fn with_settings(mut self, settings: &PrinterSettings) -> Self {
        self.disable_labels = settings.disable_labels;
        self
    }

    pub fn with_plugins(mut self, plugins: Arc<dyn PluginPort>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_links(mut self, links: Arc<dyn LinkGenerator>) -> Self {
        self.links = links;
        self
    }

    pub fn with_events(mut self, events: Arc<dyn EventSource>) -> Self {
        self.events = events;
        self
    }

    pub fn with_templates(mut self, templates: Arc<dyn TemplateRenderer>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_extension<T: Clone + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.extensions.insert(value);
        self
    }

    pub fn extension<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.extensions.get::<T>()
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("disable_labels", &self.disable_labels)
            .field("extensions", &self.extensions.len())
            .finish_non_exhaustive()
    }
}
