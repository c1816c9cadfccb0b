// MCP (Model Context Protocol) server for Riksbank monetary policy data
// Serves forecast tools to agent clients (Claude Code, etc.)

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
