//! Shapes of renderer functions.
//!
//! Renderers arrive from many independent modules, so the registry accepts any
//! function built from renderer-compatible argument and return types and then
//! checks the function's shape against the one contract it can invoke:
//! `(&RenderContext, &Kind, &Options) -> Result<Option<Component>, PrintError>`.

use std::any::{type_name, Any, TypeId};

use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{PrintError, RegisterError};
use crate::object::Printable;
use crate::options::Options;

/// Renderer invoked with the dispatched value downcast back to its kind.
pub type ErasedRenderer = Box<
    dyn Fn(&RenderContext, &dyn Any, &Options) -> Result<Option<Component>, PrintError>
        + Send
        + Sync,
>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Context,
    Options,
    Resource { type_id: TypeId, name: &'static str },
}

impl ArgKind {
    fn describe(&self) -> &'static str {
        match self {
            ArgKind::Context => "&RenderContext",
            ArgKind::Options => "&Options",
            ArgKind::Resource { name, .. } => *name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Component,
    OptionalComponent,
    Unit,
    Error,
}

impl ReturnKind {
    fn describe(&self) -> &'static str {
        match self {
            ReturnKind::Component => "Component",
            ReturnKind::OptionalComponent => "Option<Component>",
            ReturnKind::Unit => "()",
            ReturnKind::Error => "PrintError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub renderer: &'static str,
    pub args: Vec<ArgKind>,
    pub returns: Vec<ReturnKind>,
}

impl Signature {
    /// Check the shape and return the kind the renderer handles.
    pub fn validate(&self) -> Result<(TypeId, &'static str), RegisterError> {
        let renderer = self.renderer;

        if self.args.len() != 3 {
            return Err(RegisterError::ArgumentCount {
                renderer,
                found: self.args.len(),
            });
        }

        let arg_mismatch = |position: usize, expected: &'static str| RegisterError::ArgumentType {
            renderer,
            position,
            expected,
            found: self.args[position].describe(),
        };

        if self.args[0] != ArgKind::Context {
            return Err(arg_mismatch(0, "&RenderContext"));
        }
        let ArgKind::Resource { type_id, name } = self.args[1] else {
            return Err(arg_mismatch(1, "a resource kind"));
        };
        if self.args[2] != ArgKind::Options {
            return Err(arg_mismatch(2, "&Options"));
        }

        if self.returns.len() != 2 {
            return Err(RegisterError::ReturnCount {
                renderer,
                found: self.returns.len(),
            });
        }
        if !matches!(
            self.returns[0],
            ReturnKind::Component | ReturnKind::OptionalComponent
        ) {
            return Err(RegisterError::ReturnType {
                renderer,
                position: 0,
                expected: "Component",
                found: self.returns[0].describe(),
            });
        }
        if self.returns[1] != ReturnKind::Error {
            return Err(RegisterError::ReturnType {
                renderer,
                position: 1,
                expected: "PrintError",
                found: self.returns[1].describe(),
            });
        }

        Ok((type_id, name))
    }
}

/// A type that may appear as a renderer argument.
pub trait RenderArg: Send + Sync + 'static {
    fn kind() -> ArgKind;

    fn extract<'a>(
        ctx: &'a RenderContext,
        resource: &'a dyn Any,
        options: &'a Options,
    ) -> Option<&'a Self>;
}

impl RenderArg for RenderContext {
    fn kind() -> ArgKind {
        ArgKind::Context
    }

    fn extract<'a>(
        ctx: &'a RenderContext,
        _resource: &'a dyn Any,
        _options: &'a Options,
    ) -> Option<&'a Self> {
        Some(ctx)
    }
}

impl RenderArg for Options {
    fn kind() -> ArgKind {
        ArgKind::Options
    }

    fn extract<'a>(
        _ctx: &'a RenderContext,
        _resource: &'a dyn Any,
        options: &'a Options,
    ) -> Option<&'a Self> {
        Some(options)
    }
}

impl<K: Printable> RenderArg for K {
    fn kind() -> ArgKind {
        ArgKind::Resource {
            type_id: TypeId::of::<K>(),
            name: type_name::<K>(),
        }
    }

    fn extract<'a>(
        _ctx: &'a RenderContext,
        resource: &'a dyn Any,
        _options: &'a Options,
    ) -> Option<&'a Self> {
        resource.downcast_ref::<K>()
    }
}

/// A type that may be returned by a renderer.
pub trait RenderReturn: 'static {
    fn shape() -> Vec<ReturnKind>;

    fn into_output(self) -> Result<Option<Component>, PrintError>;
}

impl RenderReturn for Result<Option<Component>, PrintError> {
    fn shape() -> Vec<ReturnKind> {
        vec![ReturnKind::OptionalComponent, ReturnKind::Error]
    }

    fn into_output(self) -> Result<Option<Component>, PrintError> {
        self
    }
}

impl RenderReturn for Result<Component, PrintError> {
    fn shape() -> Vec<ReturnKind> {
        vec![ReturnKind::Component, ReturnKind::Error]
    }

    fn into_output(self) -> Result<Option<Component>, PrintError> {
        self.map(Some)
    }
}

impl RenderReturn for Result<(), PrintError> {
    fn shape() -> Vec<ReturnKind> {
        vec![ReturnKind::Unit, ReturnKind::Error]
    }

    fn into_output(self) -> Result<Option<Component>, PrintError> {
        self.map(|()| None)
    }
}

impl RenderReturn for Option<Component> {
    fn shape() -> Vec<ReturnKind> {
        vec![ReturnKind::OptionalComponent]
    }

    fn into_output(self) -> Result<Option<Component>, PrintError> {
        Ok(self)
    }
}

impl RenderReturn for Component {
    fn shape() -> Vec<ReturnKind> {
        vec![ReturnKind::Component]
    }

    fn into_output(self) -> Result<Option<Component>, PrintError> {
        Ok(Some(self))
    }
}

impl RenderReturn for () {
    fn shape() -> Vec<ReturnKind> {
        Vec::new()
    }

    fn into_output(self) -> Result<Option<Component>, PrintError> {
        Ok(None)
    }
}

/// Function usable as a renderer. Implemented for functions of one to four
/// [`RenderArg`] references returning a [`RenderReturn`].
pub trait IntoRenderer<Args, Ret>: Send + Sync + 'static {
    fn signature() -> Signature;

    #[doc(hidden)]
    fn into_erased(self) -> ErasedRenderer;
}

macro_rules! impl_into_renderer {
    ($($ty:ident $var:ident),+) => {
        impl<F, R, $($ty,)+> IntoRenderer<($($ty,)+), R> for F
        where
            F: Fn($(&$ty),+) -> R + Send + Sync + 'static,
            R: RenderReturn,
            $($ty: RenderArg,)+
        {
            fn signature() -> Signature {
                Signature {
                    renderer: type_name::<F>(),
                    args: vec![$(<$ty as RenderArg>::kind()),+],
                    returns: R::shape(),
                }
            }

            fn into_erased(self) -> ErasedRenderer {
                Box::new(move |ctx: &RenderContext, resource: &dyn Any, options: &Options| {
                    $(
                        let $var = <$ty as RenderArg>::extract(ctx, resource, options).ok_or(
                            PrintError::ArgumentMismatch {
                                expected: type_name::<$ty>(),
                            },
                        )?;
                    )+
                    (self)($($var),+).into_output()
                })
            }
        }
    };
}

impl_into_renderer!(A a);
impl_into_renderer!(A a, B b);
impl_into_renderer!(A a, B b, C c);
impl_into_renderer!(A a, B b, C c, D d);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Widget;
    use k8s_openapi::api::core::v1::Pod;

    fn signature_of<F, Args, Ret>(_f: F) -> Signature
    where
        F: IntoRenderer<Args, Ret>,
    {
        F::signature()
    }

    fn good(_: &RenderContext, _: &Widget, _: &Options) -> Result<Option<Component>, PrintError> {
        Ok(None)
    }

    fn good_plain(_: &RenderContext, _: &Pod, _: &Options) -> Result<Component, PrintError> {
        Ok(Component::text("pod"))
    }

    fn two_args(_: &RenderContext, _: &Widget) -> Result<Option<Component>, PrintError> {
        Ok(None)
    }

    fn swapped(_: &Widget, _: &RenderContext, _: &Options) -> Result<Option<Component>, PrintError> {
        Ok(None)
    }

    fn no_kind(_: &RenderContext, _: &Options, _: &Options) -> Result<Option<Component>, PrintError> {
        Ok(None)
    }

    fn no_error(_: &RenderContext, _: &Widget, _: &Options) -> Component {
        Component::text("w")
    }

    fn unit_result(_: &RenderContext, _: &Widget, _: &Options) -> Result<(), PrintError> {
        Ok(())
    }

    #[test]
    fn test_accepts_canonical_shapes() {
        let (id, name) = signature_of(good).validate().unwrap();
        assert_eq!(id, TypeId::of::<Widget>());
        assert!(name.ends_with("Widget"));

        let (id, _) = signature_of(good_plain).validate().unwrap();
        assert_eq!(id, TypeId::of::<Pod>());
    }

    #[test]
    fn test_rejects_argument_count() {
        assert!(matches!(
            signature_of(two_args).validate(),
            Err(RegisterError::ArgumentCount { found: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_argument_order() {
        assert!(matches!(
            signature_of(swapped).validate(),
            Err(RegisterError::ArgumentType { position: 0, .. })
        ));
        assert!(matches!(
            signature_of(no_kind).validate(),
            Err(RegisterError::ArgumentType {
                position: 1,
                found: "&Options",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_return_shapes() {
        assert!(matches!(
            signature_of(no_error).validate(),
            Err(RegisterError::ReturnCount { found: 1, .. })
        ));
        assert!(matches!(
            signature_of(unit_result).validate(),
            Err(RegisterError::ReturnType {
                position: 0,
                found: "()",
                ..
            })
        ));
    }
}
