//! Application services: use-case orchestration over the domain layer.

pub mod assembler;
pub mod graph_builder;
pub mod scaffold_writer;

pub use assembler::ManifestAssembler;
pub use graph_builder::TargetGraphBuilder;
pub use scaffold_writer::{
    CancelFlag, ModuleFailure, ScaffoldOptions, ScaffoldReport, ScaffoldWriter,
};
