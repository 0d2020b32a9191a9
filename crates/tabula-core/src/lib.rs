#![forbid(unsafe_code)]

//! Foundational types for the tabula table-view core.
//!
//! This crate holds the pieces the view pipeline builds on: the dynamic
//! cell [`Value`], the per-type behavior [`TypeDescriptor`], the
//! [`TypeRegistry`] that maps type names to descriptors, and the shared
//! error taxonomy. It has no opinion about rows, columns, or rendering;
//! those live upstream.

pub mod error;
pub mod registry;
pub mod value;

pub use error::{Result, TableError};
pub use registry::{Alignment, TypeDescriptor, TypeRegistry};
pub use value::Value;
