//! # wicket-registry
//!
//! Tool registry port for the wicket server: the `QueryTool` capability
//! trait every handler implements, and the `ToolRegistry` that holds the
//! fixed catalog and resolves invocations by name.

pub mod registry;
pub mod tool;

pub use registry::{RegistryError, ToolRegistry};
pub use tool::{decode_args, QueryTool, ToolError};
