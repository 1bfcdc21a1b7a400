// Workflow Core
pub mod actions;
pub mod display;
pub mod panel_layout;
pub mod selectable_list;
pub mod workflow;

pub use display::Display;
pub use workflow::{Operation, PrintFilesWorkflow, WorkflowEvent, WorkflowState};
