//! Workflow infrastructure implementations

mod runner;

pub use runner::WorkflowRunner;
