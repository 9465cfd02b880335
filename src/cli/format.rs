//! Output formatting for CLI display.

use crate::response::ExecutionResponse;

/// One-line human-readable summary of a run.
pub(super) fn format_run(response: &ExecutionResponse) -> String {
    let count = plural(response.executed_commands, "command");
    let used = if response.used_commands.is_empty() {
        String::new()
    } else {
        format!(" ({})", response.used_commands)
    };
    let at = format!(
        "({}, {}) facing {}",
        response.position.x, response.position.y, response.direction
    );

    match response.obstacle {
        Some(blocked) => format!(
            "aborted after {count}{used}: ({}, {}) is blocked; stopped at {at}",
            blocked.x, blocked.y
        ),
        None => format!("completed {count}{used}; now at {at}"),
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
