//! Layout-module boundary around the layered crossing-minimization core.
//!
//! A host application drives layout through [`GraphLayout`], which owns
//! exactly one concrete [`LayoutModule`] at a time, swaps it on algorithm
//! selection, and converts every module failure into a recoverable
//! diagnostic instead of propagating it.

pub mod attributes;
pub mod dispatch;
pub mod error;
pub mod module;

pub use attributes::{EdgeAttributes, GraphAttributes, NodeAttributes};
pub use dispatch::{GraphLayout, ModuleFactory, ModuleRegistry};
pub use error::{AlgorithmFailure, LayoutError, PreconditionViolation, Result};
pub use module::{LayeredLayout, LayoutModule};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
