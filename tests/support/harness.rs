use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory with an
/// `.optica/config.md`, and runs the optica binary inside it.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub optica_binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness whose config only has an empty frontmatter block.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Creates a harness with `frontmatter` as the config YAML.
    pub fn with_config(frontmatter: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".optica");
        let config_path = config_dir.join("config.md");

        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(
            &config_path,
            format!("---\n{}\n---\n\n# Optica config\n", frontmatter),
        )
        .expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            optica_binary: PathBuf::from(env!("CARGO_BIN_EXE_optica")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run optica with `args` in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.optica_binary)
            .args(args)
            .current_dir(self.path())
            .env_remove("OPTICA_CONFIG")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run optica")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
