//! Execute requests: parse, normalise, validate, run.
//!
//! This is the layer in front of the processor. It accepts the JSON
//! document a client sends:
//!
//! ```text
//! { "initial": {"x": 0, "y": 0, "direction": "n"},
//!   "commands": "ffrff",
//!   "obstacles": [{"x": 0, "y": 2}] }
//! ```
//!
//! upper-cases `commands` and `direction`, checks every field against the
//! configured world, and only then builds the domain values. Validation
//! collects every failure, keyed by field path, rather than stopping at
//! the first.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::config::Config;
use crate::model::{Command, Direction, Position, ReportError, RoverState};
use crate::processor::CommandProcessor;
use crate::response::ExecutionResponse;
use crate::world::{Grid, ObstacleMap, WorldError};

/// Message attached to an obstacle placed on the start cell.
pub const OBSTACLE_ON_START: &str =
    "An obstacle can not be placed on the rover initial position";

/// Errors that can occur while handling an execute request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    #[error("invalid world: {0}")]
    World(#[from] WorldError),

    #[error("inconsistent execution report: {0}")]
    Report(#[from] ReportError),
}

/// An execute request as received, before normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub initial: Option<InitialPayload>,
    pub commands: Option<String>,
    #[serde(default)]
    pub obstacles: Vec<PointPayload>,
}

/// The rover's starting cell and heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialPayload {
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub direction: Option<String>,
}

/// A raw `{x, y}` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPayload {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl From<Position> for PointPayload {
    fn from(p: Position) -> Self {
        Self {
            x: Some(p.x),
            y: Some(p.y),
        }
    }
}

/// A request that passed validation, expressed in domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub initial: RoverState,
    pub commands: String,
    pub obstacles: Vec<Position>,
}

/// Every validation failure in a request, grouped by field path.
///
/// Serializes as `{"message": "...", "errors": {"initial.x": ["..."]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Field paths that failed, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Headline: the first message, plus how many more follow.
    pub fn message(&self) -> String {
        let mut all = self.errors.values().flatten();
        let Some(first) = all.next() else {
            return "The given data was invalid.".to_string();
        };
        match all.count() {
            0 => first.clone(),
            1 => format!("{first} (and 1 more error)"),
            n => format!("{first} (and {n} more errors)"),
        }
    }

    fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid request")?;
        for field in self.fields() {
            for message in self.messages(field) {
                write!(f, "\n  {field}: {message}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Document<'a> {
            message: String,
            errors: &'a BTreeMap<String, Vec<String>>,
        }

        Document {
            message: self.message(),
            errors: &self.errors,
        }
        .serialize(serializer)
    }
}

impl ExecuteRequest {
    /// Parse a request document.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Upper-case the command string and the initial direction.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if let Some(commands) = self.commands.as_mut() {
            commands.make_ascii_uppercase();
        }
        if let Some(direction) = self
            .initial
            .as_mut()
            .and_then(|initial| initial.direction.as_mut())
        {
            direction.make_ascii_uppercase();
        }
        self
    }

    /// Normalise, then check every field against `grid`.
    pub fn validate(self, grid: &Grid) -> Result<ValidatedRequest, ValidationErrors> {
        let request = self.normalized();
        let mut errors = ValidationErrors::default();

        let initial = validate_initial(request.initial.as_ref(), grid, &mut errors);
        let commands = validate_commands(request.commands, &mut errors);
        let obstacles = validate_obstacles(&request.obstacles, grid, &mut errors);

        // Checked against the raw start cell so it reports even when other fields fail.
        if let Some(InitialPayload {
            x: Some(x),
            y: Some(y),
            ..
        }) = request.initial
            && request
                .obstacles
                .iter()
                .any(|o| o.x == Some(x) && o.y == Some(y))
        {
            errors.add("obstacles", OBSTACLE_ON_START);
        }

        match (initial, commands, obstacles) {
            (Some(initial), Some(commands), Some(obstacles)) if errors.is_empty() => {
                Ok(ValidatedRequest {
                    initial,
                    commands,
                    obstacles,
                })
            }
            _ => Err(errors),
        }
    }
}

fn validate_initial(
    initial: Option<&InitialPayload>,
    grid: &Grid,
    errors: &mut ValidationErrors,
) -> Option<RoverState> {
    let Some(initial) = initial else {
        errors.add("initial", "The initial field is required.");
        return None;
    };

    let x = validate_coordinate("initial.x", initial.x, grid.width(), errors);
    let y = validate_coordinate("initial.y", initial.y, grid.height(), errors);
    let direction = match initial.direction.as_deref() {
        None | Some("") => {
            errors.add(
                "initial.direction",
                "The initial.direction field is required.",
            );
            None
        }
        Some(letter) => {
            let direction = Direction::ALL
                .into_iter()
                .find(|d| letter.len() == 1 && letter.starts_with(d.as_char()));
            if direction.is_none() {
                errors.add(
                    "initial.direction",
                    "The selected initial.direction is invalid.",
                );
            }
            direction
        }
    };

    Some(RoverState::new(Position::new(x?, y?), direction?))
}

fn validate_commands(commands: Option<String>, errors: &mut ValidationErrors) -> Option<String> {
    match commands {
        None => {
            errors.add("commands", "The commands field is required.");
            None
        }
        Some(c) if c.is_empty() => {
            errors.add("commands", "The commands field is required.");
            None
        }
        Some(c) if c.chars().any(|ch| Command::from_char(ch).is_none()) => {
            errors.add("commands", "The commands field format is invalid.");
            None
        }
        Some(c) => Some(c),
    }
}

fn validate_obstacles(
    obstacles: &[PointPayload],
    grid: &Grid,
    errors: &mut ValidationErrors,
) -> Option<Vec<Position>> {
    let mut valid = Vec::with_capacity(obstacles.len());
    let mut all_valid = true;

    for (i, obstacle) in obstacles.iter().enumerate() {
        let x = validate_coordinate(&format!("obstacles.{i}.x"), obstacle.x, grid.width(), errors);
        let y =
            validate_coordinate(&format!("obstacles.{i}.y"), obstacle.y, grid.height(), errors);
        match (x, y) {
            (Some(x), Some(y)) => valid.push(Position::new(x, y)),
            _ => all_valid = false,
        }
    }

    all_valid.then_some(valid)
}

/// Require `value` to be present and within `[0, extent - 1]`.
fn validate_coordinate(
    field: &str,
    value: Option<i64>,
    extent: i64,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    let max = extent - 1;
    match value {
        None => {
            errors.add(field, format!("The {field} field is required."));
            None
        }
        Some(v) if !(0..=max).contains(&v) => {
            errors.add(
                field,
                format!("The {field} field must be between 0 and {max}."),
            );
            None
        }
        Some(v) => Some(v),
    }
}

/// Validate `request` against the configured world and run it.
pub fn execute(config: &Config, request: ExecuteRequest) -> Result<ExecutionResponse, RequestError> {
    let grid = Grid::new(config.world_width, config.world_height)?;
    let validated = request.validate(&grid)?;
    let obstacles = ObstacleMap::from_positions(validated.obstacles);

    debug!(
        start = %validated.initial.position,
        direction = %validated.initial.direction,
        commands = validated.commands.len(),
        obstacles = obstacles.len(),
        "executing request"
    );

    let report = CommandProcessor::new().execute(
        validated.initial,
        &validated.commands,
        &grid,
        &obstacles,
    )?;
    Ok(ExecutionResponse::from(&report))
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn grid() -> Grid {
        Grid::new(200, 200).unwrap()
    }

    fn request(value: serde_json::Value) -> ExecuteRequest {
        serde_json::from_value(value).unwrap()
    }

    fn invalid_fields(value: serde_json::Value) -> Vec<String> {
        let errors = request(value).validate(&grid()).unwrap_err();
        errors.fields().map(String::from).collect()
    }

    #[test]
    fn normalizes_case_before_validating() {
        let validated = request(json!({
            "initial": { "x": 0, "y": 0, "direction": "n" },
            "commands": "ffrLrf",
            "obstacles": [{ "x": 10, "y": 10 }],
        }))
        .validate(&grid())
        .unwrap();

        assert_eq!(validated.initial.direction, Direction::N);
        assert_eq!(validated.commands, "FFRLRF");
        assert_eq!(validated.obstacles, vec![Position::new(10, 10)]);
    }

    #[test]
    fn obstacles_are_optional() {
        let validated = request(json!({
            "initial": { "x": 4, "y": 5, "direction": "E" },
            "commands": "F",
        }))
        .validate(&grid())
        .unwrap();

        assert!(validated.obstacles.is_empty());
        assert_eq!(
            validated.initial,
            RoverState::new(Position::new(4, 5), Direction::E)
        );
    }

    #[test]
    fn rejects_unknown_command_characters() {
        let fields = invalid_fields(json!({
            "initial": { "x": 0, "y": 0, "direction": "N" },
            "commands": "fxfrLrf",
        }));
        assert_eq!(fields, vec!["commands"]);
    }

    #[test]
    fn rejects_empty_commands() {
        let errors = request(json!({
            "initial": { "x": 0, "y": 0, "direction": "N" },
            "commands": "",
        }))
        .validate(&grid())
        .unwrap_err();

        assert_eq!(errors.messages("commands"), ["The commands field is required."]);
    }

    #[test]
    fn rejects_out_of_range_start() {
        let fields = invalid_fields(json!({
            "initial": { "x": 200, "y": -1, "direction": "N" },
            "commands": "F",
        }));
        assert_eq!(fields, vec!["initial.x", "initial.y"]);
    }

    #[test]
    fn rejects_unknown_direction() {
        let fields = invalid_fields(json!({
            "initial": { "x": 1, "y": 1, "direction": "ne" },
            "commands": "F",
        }));
        assert_eq!(fields, vec!["initial.direction"]);
    }

    #[test]
    fn reports_missing_fields() {
        let fields = invalid_fields(json!({}));
        assert_eq!(fields, vec!["commands", "initial"]);

        let fields = invalid_fields(json!({ "initial": {}, "commands": "F" }));
        assert_eq!(
            fields,
            vec!["initial.direction", "initial.x", "initial.y"]
        );
    }

    #[test]
    fn rejects_out_of_range_obstacles() {
        let fields = invalid_fields(json!({
            "initial": { "x": 0, "y": 0, "direction": "N" },
            "commands": "F",
            "obstacles": [{ "x": 1, "y": 1 }, { "x": 250, "y": 3 }, { "y": 3 }],
        }));
        assert_eq!(fields, vec!["obstacles.1.x", "obstacles.2.x"]);
    }

    #[test]
    fn rejects_obstacle_on_start_cell() {
        let errors = request(json!({
            "initial": { "x": 3, "y": 1, "direction": "N" },
            "commands": "ffrLrf",
            "obstacles": [{ "x": 3, "y": 1 }],
        }))
        .validate(&grid())
        .unwrap_err();

        assert_eq!(errors.messages("obstacles"), [OBSTACLE_ON_START]);
    }

    #[test]
    fn range_follows_grid_size() {
        let small = Grid::new(10, 10).unwrap();
        let errors = request(json!({
            "initial": { "x": 10, "y": 9, "direction": "N" },
            "commands": "F",
        }))
        .validate(&small)
        .unwrap_err();

        assert_eq!(
            errors.messages("initial.x"),
            ["The initial.x field must be between 0 and 9."]
        );
    }

    #[test]
    fn error_document_shape() {
        let errors = request(json!({
            "initial": { "x": 0, "y": 0, "direction": "Q" },
            "commands": "FX",
        }))
        .validate(&grid())
        .unwrap_err();

        let doc = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            doc,
            json!({
                "message": "The commands field format is invalid. (and 1 more error)",
                "errors": {
                    "commands": ["The commands field format is invalid."],
                    "initial.direction": ["The selected initial.direction is invalid."],
                },
            })
        );
    }

    #[test]
    fn rejects_non_integer_coordinates_at_parse() {
        let err = ExecuteRequest::from_json(
            r#"{"initial": {"x": "zero", "y": 0, "direction": "N"}, "commands": "F"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::Json(_)));
    }

    #[test]
    fn executes_mixed_case_request() {
        let response = execute(
            &Config::default(),
            request(json!({
                "initial": { "x": 0, "y": 0, "direction": "n" },
                "commands": "fFrFf",
                "obstacles": [],
            })),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(response).unwrap(),
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
    fn execute_stops_before_obstacle() {
        let response = execute(
            &Config::default(),
            request(json!({
                "initial": { "x": 0, "y": 0, "direction": "N" },
                "commands": "FFFF",
                "obstacles": [{ "x": 0, "y": 2 }],
            })),
        )
        .unwrap();

        assert!(response.aborted);
        assert_eq!(response.position, Position::new(0, 1));
        assert_eq!(response.direction, Direction::N);
        assert_eq!(response.executed_commands, 1);
        assert_eq!(response.obstacle, Some(Position::new(0, 2)));
    }

    #[test]
    fn execute_reports_outside_cell() {
        let response = execute(
            &Config::default(),
            request(json!({
                "initial": { "x": 0, "y": 0, "direction": "S" },
                "commands": "F",
            })),
        )
        .unwrap();

        assert!(response.aborted);
        assert_eq!(response.position, Position::new(0, 0));
        assert_eq!(response.executed_commands, 0);
        assert_eq!(response.obstacle, Some(Position::new(0, -1)));
    }

    #[test]
    fn execute_surfaces_validation_errors() {
        let err = execute(&Config::default(), ExecuteRequest::default()).unwrap_err();
        assert!(matches!(err, RequestError::Invalid(_)));
    }
}
