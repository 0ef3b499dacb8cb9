use std::path::PathBuf;

use thiserror::Error;

mod probe;
mod process;

pub use probe::{ensure_available, is_available, resolves_on_path};
pub use process::{command_line, run};

/// How one external tool gets invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run a program resolved on the search path, directly.
    Direct { program: String },
    /// Run a script through an interpreter: `interpreter script args…`.
    Script {
        interpreter: String,
        script: PathBuf,
    },
    /// Run a framework entrypoint through an interpreter, optionally
    /// selecting a plugin: `interpreter entry [plugin] args…`.
    Framework {
        interpreter: String,
        entry: PathBuf,
        plugin: Option<String>,
    },
}

/// Static metadata describing one wrappable external tool: the verb it
/// is addressed by, a one-line summary for listings, and how to build
/// its command line.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub invocation: Invocation,
}

impl ToolDescriptor {
    pub fn new(name: &'static str, description: &'static str, invocation: Invocation) -> Self {
        Self {
            name,
            description,
            invocation,
        }
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{program} is required but not installed")]
    ToolNotInstalled { program: String },

    #[error("script {} not found", path.display())]
    ScriptNotFound { path: PathBuf },

    #[error("failed to launch {program}: {source}")]
    LaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with status {code}")]
    NonZeroExit { program: String, code: i32 },
}
