//! Conversational runtime tying the language pipeline to the catalog.

pub mod runtime;

pub use runtime::AgentRuntime;
