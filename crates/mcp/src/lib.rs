//! MCP surface for the vehicle catalog.
//!
//! Exposes the same search operations the chat assistant uses as tools
//! an MCP client can call over stdio.

pub mod server;

pub use server::CatalogMcpServer;
