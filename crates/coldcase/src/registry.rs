use std::path::{Path, PathBuf};

use dispatch::{Invocation, ToolDescriptor};

/// Interpreter shared by the script-backed families.
pub const PYTHON: &str = "python3";

/// Directory holding the DidierStevens analysis scripts.
pub const DIDIER_SUITE_DIR: &str = "DidierStevensSuite";

/// Directory holding the Volatility3 checkout; `vol.py` is the entrypoint.
pub const VOLATILITY_DIR: &str = "volatility3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    General,
    SleuthKit,
    DidierStevens,
    Volatility3,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Family::General,
        Family::SleuthKit,
        Family::DidierStevens,
        Family::Volatility3,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Family::General => "General Tools",
            Family::SleuthKit => "Sleuth Kit",
            Family::DidierStevens => "DidierStevens Suite",
            Family::Volatility3 => "Volatility3",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolEntry {
    pub family: Family,
    pub descriptor: ToolDescriptor,
}

/// The immutable table of wrapped tools, built once at startup,
/// insertion-ordered for deterministic listings.
pub struct Registry {
    entries: Vec<ToolEntry>,
}

impl Registry {
    pub fn builtin() -> Self {
        let mut entries = Vec::new();

        entries.push(direct(
            Family::General,
            "exif",
            "exiftool",
            "Extract metadata from files using ExifTool",
        ));
        entries.push(direct(
            Family::General,
            "binwalk",
            "binwalk",
            "Analyze and extract firmware images using Binwalk",
        ));

        for (name, description) in SLEUTH_KIT_TOOLS {
            entries.push(direct(Family::SleuthKit, name, name, description));
        }

        for (name, description) in DIDIER_STEVENS_TOOLS {
            entries.push(didier_script(name, description));
        }

        for (name, plugin, description) in VOLATILITY_TOOLS {
            entries.push(vol_plugin(name, plugin, description));
        }

        Self { entries }
    }

    pub fn all(&self) -> &[ToolEntry] {
        &self.entries
    }

    pub fn lookup(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.descriptor.name == name)
    }

    /// Entries of one family, in registry order.
    pub fn family(&self, family: Family) -> impl Iterator<Item = &ToolEntry> {
        self.entries.iter().filter(move |e| e.family == family)
    }
}

/// True for the Volatility3 plugin verbs that take a memory image via
/// `-f/--file`.
pub fn is_memory_plugin(name: &str) -> bool {
    name.starts_with("windows.") || name.starts_with("linux.") || name.starts_with("mac.")
}

pub fn didier_suite_present() -> bool {
    Path::new(DIDIER_SUITE_DIR).is_dir()
}

pub fn volatility_present() -> bool {
    Path::new(VOLATILITY_DIR).join("vol.py").is_file()
}

fn direct(
    family: Family,
    name: &'static str,
    program: &'static str,
    description: &'static str,
) -> ToolEntry {
    ToolEntry {
        family,
        descriptor: ToolDescriptor::new(
            name,
            description,
            Invocation::Direct {
                program: program.to_string(),
            },
        ),
    }
}

// Every suite script is named after its verb.
fn didier_script(name: &'static str, description: &'static str) -> ToolEntry {
    let script = Path::new(DIDIER_SUITE_DIR).join(format!("{name}.py"));
    ToolEntry {
        family: Family::DidierStevens,
        descriptor: ToolDescriptor::new(
            name,
            description,
            Invocation::Script {
                interpreter: PYTHON.to_string(),
                script,
            },
        ),
    }
}

fn vol_plugin(
    name: &'static str,
    plugin: Option<&'static str>,
    description: &'static str,
) -> ToolEntry {
    ToolEntry {
        family: Family::Volatility3,
        descriptor: ToolDescriptor::new(
            name,
            description,
            Invocation::Framework {
                interpreter: PYTHON.to_string(),
                entry: PathBuf::from(VOLATILITY_DIR).join("vol.py"),
                plugin: plugin.map(str::to_string),
            },
        ),
    }
}

const SLEUTH_KIT_TOOLS: [(&str, &str); 5] = [
    ("fls", "List directory and file entries"),
    ("fsstat", "Display file system details"),
    ("istat", "Display image metadata"),
    ("jls", "List journal entries"),
    ("tsk_loaddb", "Load image into database"),
];

const DIDIER_STEVENS_TOOLS: [(&str, &str); 15] = [
    ("1768", "Analyze 1768 PDF files"),
    ("amsiscan", "Scan AMSI cache"),
    ("pdf-parser", "Parse PDF documents for analysis"),
    ("pdfid", "Test PDF files for malicious content"),
    ("oledump", "Analyze OLE files (Office documents)"),
    ("pecheck", "Display PE file information"),
    ("base64dump", "Extract base64 strings from files"),
    ("emldump", "Extract and analyze EML email files"),
    ("jpegdump", "Analyze JPEG file structure and metadata"),
    ("hash", "Calculate file hashes with multiple algorithms"),
    ("cut-bytes", "Extract specific byte ranges from files"),
    ("find-file-in-file", "Find embedded files within other files"),
    ("byte-stats", "Calculate byte distribution statistics"),
    ("extractscripts", "Extract embedded scripts from files"),
    ("cs-parse-traffic", "Parse Cobalt Strike traffic"),
];

const VOLATILITY_TOOLS: [(&str, Option<&str>, &str); 22] = [
    ("vol", None, "Run volatility3 memory forensics framework"),
    ("volshell", Some("volshell"), "Interactive volatility shell"),
    (
        "windows.pslist",
        Some("windows.pslist"),
        "List running processes (Windows memory)",
    ),
    (
        "windows.pstree",
        Some("windows.pstree"),
        "Show process tree (Windows memory)",
    ),
    (
        "windows.dlllist",
        Some("windows.dlllist"),
        "List DLLs for processes (Windows memory)",
    ),
    (
        "windows.handles",
        Some("windows.handles"),
        "List handles (Windows memory)",
    ),
    (
        "windows.cmdline",
        Some("windows.cmdline"),
        "Display process command lines (Windows memory)",
    ),
    (
        "windows.envars",
        Some("windows.envars"),
        "Display process environment variables (Windows memory)",
    ),
    (
        "windows.filescan",
        Some("windows.filescan"),
        "Scan for file objects (Windows memory)",
    ),
    (
        "windows.modules",
        Some("windows.modules"),
        "List loaded kernel modules (Windows memory)",
    ),
    (
        "windows.driverscan",
        Some("windows.driverscan"),
        "Scan for driver objects (Windows memory)",
    ),
    (
        "windows.callbacks",
        Some("windows.callbacks"),
        "List registered callbacks (Windows memory)",
    ),
    (
        "windows.services",
        Some("windows.services"),
        "List services (Windows memory)",
    ),
    (
        "windows.registry",
        Some("windows.registry"),
        "Registry analysis (Windows memory)",
    ),
    (
        "windows.hashdump",
        Some("windows.hashdump"),
        "Dump password hashes (Windows memory)",
    ),
    (
        "linux.pslist",
        Some("linux.pslist"),
        "List running processes (Linux memory)",
    ),
    (
        "linux.pstree",
        Some("linux.pstree"),
        "Show process tree (Linux memory)",
    ),
    (
        "linux.bash",
        Some("linux.bash"),
        "Recover bash history (Linux memory)",
    ),
    (
        "linux.proc_maps",
        Some("linux.proc_maps"),
        "Process memory maps (Linux memory)",
    ),
    (
        "mac.pslist",
        Some("mac.pslist"),
        "List running processes (macOS memory)",
    ),
    (
        "mac.pstree",
        Some("mac.pstree"),
        "Show process tree (macOS memory)",
    ),
    ("info", Some("info"), "Display information about a memory image"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_all_four_families() {
        let registry = Registry::builtin();
        assert_eq!(registry.family(Family::General).count(), 2);
        assert_eq!(registry.family(Family::SleuthKit).count(), 5);
        assert_eq!(registry.family(Family::DidierStevens).count(), 15);
        assert_eq!(registry.family(Family::Volatility3).count(), 22);
        assert_eq!(registry.all().len(), 44);
    }

    #[test]
    fn names_are_unique() {
        let registry = Registry::builtin();
        let names: HashSet<_> = registry.all().iter().map(|e| e.descriptor.name).collect();
        assert_eq!(names.len(), registry.all().len());
    }

    #[test]
    fn lookup_returns_matching_descriptor() {
        let registry = Registry::builtin();
        for entry in registry.all() {
            let found = registry.lookup(entry.descriptor.name).unwrap();
            assert_eq!(found.descriptor.name, entry.descriptor.name);
        }
        assert!(registry.lookup("not-a-tool").is_none());
    }

    #[test]
    fn exif_maps_to_exiftool() {
        let registry = Registry::builtin();
        let entry = registry.lookup("exif").unwrap();
        assert_eq!(
            entry.descriptor.invocation,
            Invocation::Direct {
                program: "exiftool".to_string()
            }
        );
    }

    #[test]
    fn didier_scripts_live_in_the_suite_directory() {
        let registry = Registry::builtin();
        let entry = registry.lookup("pdfid").unwrap();
        match &entry.descriptor.invocation {
            Invocation::Script {
                interpreter,
                script,
            } => {
                assert_eq!(interpreter, PYTHON);
                assert_eq!(script, &Path::new(DIDIER_SUITE_DIR).join("pdfid.py"));
            }
            other => panic!("expected Script invocation, got {other:?}"),
        }
    }

    #[test]
    fn bare_vol_has_no_plugin_token() {
        let registry = Registry::builtin();
        match &registry.lookup("vol").unwrap().descriptor.invocation {
            Invocation::Framework { plugin, .. } => assert!(plugin.is_none()),
            other => panic!("expected Framework invocation, got {other:?}"),
        }
        match &registry
            .lookup("windows.pslist")
            .unwrap()
            .descriptor
            .invocation
        {
            Invocation::Framework { plugin, entry, .. } => {
                assert_eq!(plugin.as_deref(), Some("windows.pslist"));
                assert_eq!(entry, &Path::new(VOLATILITY_DIR).join("vol.py"));
            }
            other => panic!("expected Framework invocation, got {other:?}"),
        }
    }

    #[test]
    fn memory_plugin_detection() {
        assert!(is_memory_plugin("windows.pslist"));
        assert!(is_memory_plugin("linux.bash"));
        assert!(is_memory_plugin("mac.pstree"));
        assert!(!is_memory_plugin("vol"));
        assert!(!is_memory_plugin("volshell"));
        assert!(!is_memory_plugin("info"));
    }

    #[test]
    fn listing_order_groups_families_contiguously() {
        let registry = Registry::builtin();
        let mut seen = Vec::new();
        for entry in registry.all() {
            if seen.last() != Some(&entry.family) {
                seen.push(entry.family);
            }
        }
        assert_eq!(seen, Family::ALL);
    }
}
