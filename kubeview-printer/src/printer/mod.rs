//! Dispatch from a resource's concrete kind to the renderer registered for it.

mod fallback;
mod signature;

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{PrintError, RegisterError};
use crate::object::Printable;
use crate::options::Options;

pub use fallback::print_default;
pub use signature::{
    ArgKind, ErasedRenderer, IntoRenderer, RenderArg, RenderReturn, ReturnKind, Signature,
};

struct RendererEntry {
    kind: &'static str,
    render: ErasedRenderer,
}

/// Renderer table, filled once at start-up and shared read-only afterwards
/// (usually behind an `Arc`).
pub struct PrinterRegistry {
    options: Options,
    renderers: HashMap<TypeId, RendererEntry>,
}

impl PrinterRegistry {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer of shape `(&RenderContext, &Kind, &Options) -> Result<_, PrintError>`.
    ///
    /// Any other shape is rejected with an error naming the offending argument or
    /// return value. A second renderer for the same kind is rejected and the
    /// first one stays in place.
    pub fn register<F, Args, Ret>(&mut self, renderer: F) -> Result<(), RegisterError>
    where
        F: IntoRenderer<Args, Ret>,
    {
        let (key, kind) = F::signature().validate()?;
        if self.renderers.contains_key(&key) {
            return Err(RegisterError::Duplicate { kind });
        }

        debug!(kind, "registered renderer");
        self.renderers.insert(
            key,
            RendererEntry {
                kind,
                render: renderer.into_erased(),
            },
        );
        Ok(())
    }

    /// Render `resource` with the renderer registered for its kind.
    ///
    /// Unregistered list kinds render nothing (`Ok(None)`); unregistered single
    /// objects get the generic Name/Labels/Age table.
    #[tracing::instrument(skip_all, fields(kind = resource.type_label()))]
    pub fn print(
        &self,
        ctx: &RenderContext,
        resource: &dyn Printable,
    ) -> Result<Option<Component>, PrintError> {
        let value = resource.as_any();
        if let Some(entry) = self.renderers.get(&value.type_id()) {
            return (entry.render)(ctx, value, &self.options);
        }

        match resource.as_object() {
            Some(object) => {
                debug!("no renderer registered, using default table");
                print_default(ctx, object, &self.options).map(Some)
            }
            None => {
                debug!("no renderer registered for list kind");
                Ok(None)
            }
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_registered<K: Printable>(&self) -> bool {
        self.renderers.contains_key(&TypeId::of::<K>())
    }

    pub fn registered_kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.renderers.values().map(|e| e.kind).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl fmt::Debug for PrinterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrinterRegistry")
            .field("kinds", &self.registered_kinds())
            .finish()
    }
}
