use std::ffi::OsString;
use std::process::Command;

use tracing::debug;

use crate::{DispatchError, Invocation, ToolDescriptor};

/// Build the concrete `(program, argv)` pair for one dispatch. Fixed
/// prefix tokens (script path, plugin name) come first; caller args
/// follow verbatim, order and content untouched. No shell is involved.
pub fn command_line(descriptor: &ToolDescriptor, args: &[OsString]) -> (String, Vec<OsString>) {
    let (program, mut argv) = match &descriptor.invocation {
        Invocation::Direct { program } => (program.clone(), Vec::new()),
        Invocation::Script {
            interpreter,
            script,
        } => (
            interpreter.clone(),
            vec![script.clone().into_os_string()],
        ),
        Invocation::Framework {
            interpreter,
            entry,
            plugin,
        } => {
            let mut prefix = vec![entry.clone().into_os_string()];
            if let Some(plugin) = plugin {
                prefix.push(OsString::from(plugin));
            }
            (interpreter.clone(), prefix)
        }
    };
    argv.extend(args.iter().cloned());
    (program, argv)
}

/// Run the external process for `descriptor`, relaying the caller's
/// stdin, stdout and stderr to the child, and block until it exits.
/// Exactly one child per call; no retries, no timeout (interactive
/// children keep the inherited stdin for as long as they need it).
pub fn run(descriptor: &ToolDescriptor, args: &[OsString]) -> Result<(), DispatchError> {
    let (program, argv) = command_line(descriptor, args);
    debug!(tool = descriptor.name, program = %program, args = argv.len(), "dispatching");

    let status = Command::new(&program)
        .args(&argv)
        .status()
        .map_err(|source| DispatchError::LaunchFailure {
            program: program.clone(),
            source,
        })?;

    if status.success() {
        return Ok(());
    }

    // A signal-terminated child reports no exit code; fold it into the
    // generic nonzero case.
    let code = status.code().unwrap_or(1);
    Err(DispatchError::NonZeroExit { program, code })
}
