//! Sample payloads and reference scenes for costgraph

pub mod error;
pub mod position;
pub mod report;
pub mod scenario;


pub use error::{Result, ScenarioError};
pub use position::{position_graph, Position};
pub use report::RouteReport;
pub use scenario::{Scenario, Scene};
