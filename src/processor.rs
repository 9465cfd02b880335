//! Command processor: runs a command string against a world.
//!
//! A single left-to-right pass over the commands. Each recognised command
//! proposes a heading and the cell that heading projects onto from the
//! current position. If that cell is off the grid or blocked, the run stops
//! and reports the cell; otherwise the command is committed.
//!
//! Turns are checked too: a turn that would face into a blocked or
//! off-grid cell aborts the run even though the rover never moves into it.

use tracing::{debug, trace};

use crate::model::{Command, ExecutionReport, ReportError, RoverState};
use crate::world::{Grid, ObstacleMap};

/// Drives a rover through a command string.
///
/// Stateless: every call to [`execute`](Self::execute) is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessor;

impl CommandProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Run `commands` from `initial`, stopping at the first illegal move.
    ///
    /// Characters other than `F`, `L`, `R` are skipped without being
    /// counted. The error case only arises if the report contract is
    /// broken, which valid processing never does.
    pub fn execute(
        &self,
        initial: RoverState,
        commands: &str,
        grid: &Grid,
        obstacles: &ObstacleMap,
    ) -> Result<ExecutionReport, ReportError> {
        let mut state = initial;
        let mut executed = 0;
        let mut used = String::with_capacity(commands.len());

        for c in commands.chars() {
            let Some(command) = Command::from_char(c) else {
                trace!(command = %c.escape_debug(), "skipping unrecognised command");
                continue;
            };

            let direction = match command {
                Command::Forward => state.direction,
                Command::TurnLeft => state.direction.turn_left(),
                Command::TurnRight => state.direction.turn_right(),
            };
            let candidate = direction.next_position(state.position);

            if !grid.contains(candidate) {
                debug!(%candidate, executed, "run aborted at grid boundary");
                return ExecutionReport::aborted_at(state, candidate, executed, used);
            }
            if obstacles.contains(candidate) {
                debug!(%candidate, executed, "run aborted at obstacle");
                return ExecutionReport::aborted_at(state, candidate, executed, used);
            }

            state = match command {
                Command::Forward => state.with_position(candidate),
                Command::TurnLeft | Command::TurnRight => state.with_direction(direction),
            };
            executed += 1;
            used.push(command.as_char());
            trace!(
                command = %c,
                position = %state.position,
                direction = %state.direction,
                "command applied"
            );
        }

        ExecutionReport::completed(state, executed, used)
    }
}
