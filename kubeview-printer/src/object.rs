//! Resource abstraction used by the printers.
//!
//! A renderer is selected by the concrete Rust type of the value being printed.
//! Typed k8s-openapi resources and CRD types are [`Object`]s out of the box,
//! untyped resources go through [`Unstructured`] and homogeneous collections
//! through [`KindList`].

use std::any::{type_name, Any};

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::serde_json::{self, Value};
use kube::api::DynamicObject;
use kube::core::ObjectList;

use crate::error::PrintError;

/// A single cluster resource.
pub trait Object: Send + Sync + 'static {
    fn meta(&self) -> &ObjectMeta;

    fn api_version(&self) -> &str;

    fn kind(&self) -> &str;

    fn to_value(&self) -> Result<Value, serde_json::Error>;

    fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }

    fn namespace(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }
}

impl<K> Object for K
where
    K: k8s_openapi::Resource
        + k8s_openapi::Metadata<Ty = ObjectMeta>
        + serde::Serialize
        + Send
        + Sync
        + 'static,
{
    fn meta(&self) -> &ObjectMeta {
        self.metadata()
    }

    fn api_version(&self) -> &str {
        K::API_VERSION
    }

    fn kind(&self) -> &str {
        K::KIND
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// A resource whose schema is not known at compile time.
#[derive(Debug, Clone)]
pub struct Unstructured(pub DynamicObject);

impl Object for Unstructured {
    fn meta(&self) -> &ObjectMeta {
        &self.0.metadata
    }

    fn api_version(&self) -> &str {
        self.0
            .types
            .as_ref()
            .map(|t| t.api_version.as_str())
            .unwrap_or_default()
    }

    fn kind(&self) -> &str {
        self.0
            .types
            .as_ref()
            .map(|t| t.kind.as_str())
            .unwrap_or_default()
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.0)
    }
}

impl From<DynamicObject> for Unstructured {
    fn from(obj: DynamicObject) -> Self {
        Self(obj)
    }
}

/// A homogeneous list of resources of one kind.
#[derive(Debug, Clone)]
pub struct KindList<K> {
    pub items: Vec<K>,
}

impl<K> KindList<K> {
    pub fn new(items: Vec<K>) -> Self {
        Self { items }
    }
}

impl<K: Clone> From<ObjectList<K>> for KindList<K> {
    fn from(list: ObjectList<K>) -> Self {
        Self { items: list.items }
    }
}

/// Anything the printer registry can dispatch on: a single object or a list.
pub trait Printable: Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    /// `None` for list kinds.
    fn as_object(&self) -> Option<&dyn Object>;

    fn type_label(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl<K: Object> Printable for K {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_object(&self) -> Option<&dyn Object> {
        Some(self)
    }
}

impl<K: Object> Printable for KindList<K> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_object(&self) -> Option<&dyn Object> {
        None
    }
}

/// Namespace, type and name of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentity {
    pub namespace: String,
    pub api_version: String,
    pub kind: String,
    pub name: String,
}

impl ObjectIdentity {
    pub fn of(object: &dyn Object) -> Result<Self, PrintError> {
        let api_version = object.api_version();
        let kind = object.kind();
        let name = object.name();

        if api_version.is_empty() || kind.is_empty() {
            return Err(PrintError::MissingIdentity(format!(
                "object {name:?} has no apiVersion/kind"
            )));
        }
        if name.is_empty() {
            return Err(PrintError::MissingIdentity(format!("{kind} has no name")));
        }

        Ok(Self {
            namespace: object.namespace().to_string(),
            api_version: api_version.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
        })
    }
}
