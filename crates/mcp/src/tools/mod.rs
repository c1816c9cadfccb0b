pub mod discovery;
pub mod series;
mod registry;

pub use discovery::{ListPolicyRoundsTool, ListSeriesTool, PolicyDataTool};
pub use series::SeriesDataTool;
pub use registry::{json_schema_object, json_schema_string, Tool, ToolRegistry};
