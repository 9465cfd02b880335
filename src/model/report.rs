//! Execution report: the immutable outcome of one command run.

use super::{Command, Position, RoverState};

/// A report was assembled with fields that contradict each other.
///
/// This is a contract violation inside the engine, never a user error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("obstacle position must be present when execution is aborted")]
    MissingObstacle,

    #[error("obstacle position must be absent when execution is not aborted (got {0})")]
    UnexpectedObstacle(Position),

    #[error("used commands hold {used} characters but {executed} commands were executed")]
    CountMismatch { executed: usize, used: usize },

    #[error("used commands contain '{0}', which is not a rover command")]
    UnknownCommand(char),
}

/// What happened when a command string was run.
///
/// Only constructible through [`ExecutionReport::new`], which refuses
/// inconsistent combinations. `obstacle` is the first rejected cell,
/// not where the rover stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    final_state: RoverState,
    aborted: bool,
    obstacle: Option<Position>,
    executed_commands: usize,
    used_commands: String,
}

impl ExecutionReport {
    pub fn new(
        final_state: RoverState,
        aborted: bool,
        obstacle: Option<Position>,
        executed_commands: usize,
        used_commands: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let used_commands = used_commands.into();

        match (aborted, obstacle) {
            (true, None) => return Err(ReportError::MissingObstacle),
            (false, Some(p)) => return Err(ReportError::UnexpectedObstacle(p)),
            _ => {}
        }

        if let Some(c) = used_commands
            .chars()
            .find(|&c| Command::from_char(c).is_none())
        {
            return Err(ReportError::UnknownCommand(c));
        }

        let used = used_commands.chars().count();
        if used != executed_commands {
            return Err(ReportError::CountMismatch {
                executed: executed_commands,
                used,
            });
        }

        Ok(Self {
            final_state,
            aborted,
            obstacle,
            executed_commands,
            used_commands,
        })
    }

    /// A run that consumed its whole command string.
    pub fn completed(
        final_state: RoverState,
        executed_commands: usize,
        used_commands: impl Into<String>,
    ) -> Result<Self, ReportError> {
        Self::new(final_state, false, None, executed_commands, used_commands)
    }

    /// A run stopped by the cell at `obstacle`.
    pub fn aborted_at(
        final_state: RoverState,
        obstacle: Position,
        executed_commands: usize,
        used_commands: impl Into<String>,
    ) -> Result<Self, ReportError> {
        Self::new(
            final_state,
            true,
            Some(obstacle),
            executed_commands,
            used_commands,
        )
    }

    pub fn final_state(&self) -> RoverState {
        self.final_state
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn obstacle(&self) -> Option<Position> {
        self.obstacle
    }

    pub fn executed_commands(&self) -> usize {
        self.executed_commands
    }

    pub fn used_commands(&self) -> &str {
        &self.used_commands
    }
}
