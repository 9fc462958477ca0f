//! Test helpers for building data directories and capturing CLI output.

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

/// Temporary data directory that lives as long as the value.
pub(super) struct DataFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DataFixture {
    /// An empty directory; loading it seeds the sample dataset.
    pub(super) fn empty() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    /// A directory whose population file holds no records.
    pub(super) fn without_population() -> Self {
        let fixture = Self::empty();
        fs::write(fixture.root.join("population.json"), "[]").expect("write population");
        fixture
    }

    pub(super) fn root(&self) -> &Utf8PathBuf {
        &self.root
    }
}

/// Run the CLI with `args` and `input`, returning the outcome and stdout.
pub(super) fn invoke(args: &[&str], input: &str) -> (Result<(), super::CliError>, String) {
    let mut invocation = vec!["popquery"];
    invocation.extend_from_slice(args);
    let mut out = Vec::new();
    let result = super::run_with(invocation, input.as_bytes(), &mut out);
    let text = String::from_utf8(out).expect("utf-8 output");
    (result, text)
}
