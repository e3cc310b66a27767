//! Prompt composition engine for the UI Gen CLI.
//!
//! This crate provides typed prompt assembly with:
//! - A closed component catalog (task context, modality, tech constraint,
//!   output control, refinement)
//! - Per-category stores holding frontend and backend text fragments
//! - A composer that concatenates component texts in request order
//! - The shipped text catalog used by the bundled MCP server profiles

pub mod component;
pub mod composer;
pub mod defaults;
pub mod error;
pub mod store;

// Re-export main types
pub use component::{
    Category, CategoryMember, Component, Modality, OutputControl, Refinement, TaskContext,
    TechConstraint,
};
pub use composer::PromptComposer;
pub use error::ComposeError;
pub use store::{Audience, CategoryStore, PromptStore};
