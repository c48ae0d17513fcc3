// lib.rs
//! Turns cluster objects into dashboard view components.
//!
//! [`PrinterRegistry`] picks a renderer by the concrete kind of the resource,
//! renderers assemble object pages with [`ObjectComposer`] and listings with
//! [`ObjectTable`], and kinds nobody registered fall back to a generic table.

pub mod component;
pub mod composer;
pub mod config;
pub mod context;
pub mod error;
pub mod log;
pub mod object;
pub mod options;
pub mod ports;
pub mod printer;
pub mod table;
mod utils;

#[cfg(test)]
mod testing;

pub use component::Component;
pub use composer::{ItemDescriptor, ObjectComposer};
pub use config::{LogSettings, PrinterSettings};
pub use context::RenderContext;
pub use error::{BoxError, Collaborator, PrintError, RegisterError};
pub use object::{KindList, Object, ObjectIdentity, Printable, Unstructured};
pub use options::Options;
pub use printer::PrinterRegistry;
pub use table::ObjectTable;
