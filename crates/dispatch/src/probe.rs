use std::path::Path;

use crate::{DispatchError, Invocation, ToolDescriptor};

/// True when `program` resolves to an executable on the search path.
/// Nothing is executed.
pub fn resolves_on_path(program: &str) -> bool {
    which::which(program).is_ok()
}

// Any non-success stat counts as absent, permission errors included.
fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Typed precheck for one descriptor: `ToolNotInstalled` when the
/// program or interpreter is missing from the search path,
/// `ScriptNotFound` when the referenced script or framework entrypoint
/// is absent on disk.
pub fn ensure_available(descriptor: &ToolDescriptor) -> Result<(), DispatchError> {
    match &descriptor.invocation {
        Invocation::Direct { program } => {
            if resolves_on_path(program) {
                Ok(())
            } else {
                Err(DispatchError::ToolNotInstalled {
                    program: program.clone(),
                })
            }
        }
        Invocation::Script {
            interpreter,
            script,
        } => {
            if !resolves_on_path(interpreter) {
                return Err(DispatchError::ToolNotInstalled {
                    program: interpreter.clone(),
                });
            }
            if !file_exists(script) {
                return Err(DispatchError::ScriptNotFound {
                    path: script.clone(),
                });
            }
            Ok(())
        }
        Invocation::Framework {
            interpreter, entry, ..
        } => {
            if !resolves_on_path(interpreter) {
                return Err(DispatchError::ToolNotInstalled {
                    program: interpreter.clone(),
                });
            }
            if !file_exists(entry) {
                return Err(DispatchError::ScriptNotFound { path: entry.clone() });
            }
            Ok(())
        }
    }
}

/// Boolean view of `ensure_available`, for aggregate reporting.
pub fn is_available(descriptor: &ToolDescriptor) -> bool {
    ensure_available(descriptor).is_ok()
}
