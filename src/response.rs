//! JSON shapes the CLI prints.
//!
//! An execution report renders as below. Field names and `null`
//! semantics are what downstream consumers parse:
//!
//! ```text
//! { "position": {"x": 2, "y": 2}, "direction": "E", "aborted": false,
//!   "executedCommands": 5, "obstacle": null, "usedCommands": "FFRFF" }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::model::{Direction, ExecutionReport, Position};

/// Serializable view of an [`ExecutionReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponse {
    pub position: Position,
    pub direction: Direction,
    pub aborted: bool,
    pub executed_commands: usize,

    /// The first rejected cell, or `null` when the run completed.
    pub obstacle: Option<Position>,

    pub used_commands: String,
}

impl From<&ExecutionReport> for ExecutionResponse {
    fn from(report: &ExecutionReport) -> Self {
        let state = report.final_state();
        Self {
            position: state.position,
            direction: state.direction,
            aborted: report.is_aborted(),
            executed_commands: report.executed_commands(),
            obstacle: report.obstacle(),
            used_commands: report.used_commands().to_string(),
        }
    }
}

/// The world a deployment runs rovers in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldResponse {
    pub world_width: i64,
    pub world_height: i64,

    /// Cells shown per side in a map viewport.
    pub grid_size: u32,
}

impl From<&Config> for WorldResponse {
    fn from(config: &Config) -> Self {
        Self {
            world_width: config.world_width,
            world_height: config.world_height,
            grid_size: config.grid_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::model::RoverState;

    #[test]
    fn completed_run_renders_null_obstacle() {
        let state = RoverState::new(Position::new(2, 2), Direction::E);
        let report = ExecutionReport::completed(state, 5, "FFRFF").unwrap();

        let json = serde_json::to_value(ExecutionResponse::from(&report)).unwrap();
        assert_eq!(
            json,
            json!({
                "position": { "x": 2, "y": 2 },
                "direction": "E",
                "aborted": false,
                "executedCommands": 5,
                "obstacle": null,
                "usedCommands": "FFRFF",
            })
        );
    }

    #[test]
    fn aborted_run_renders_obstacle() {
        let state = RoverState::new(Position::new(0, 1), Direction::N);
        let report = ExecutionReport::aborted_at(state, Position::new(0, 2), 1, "F").unwrap();

        let json = serde_json::to_value(ExecutionResponse::from(&report)).unwrap();
        assert_eq!(json["aborted"], json!(true));
        assert_eq!(json["obstacle"], json!({ "x": 0, "y": 2 }));
        assert_eq!(json["position"], json!({ "x": 0, "y": 1 }));
        assert_eq!(json["usedCommands"], json!("F"));
    }

    #[test]
    fn world_renders_camel_case() {
        let json = serde_json::to_value(WorldResponse::from(&Config::default())).unwrap();
        assert_eq!(
            json,
            json!({ "worldWidth": 200, "worldHeight": 200, "gridSize": 20 })
        );
    }
}
