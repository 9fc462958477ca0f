//! Capability-scoped access to the data directory, built on `cap-std` and
//! `camino`.
//!
//! The loader only ever touches three well-known file names, so it works
//! through a single [`fs_utf8::Dir`] handle instead of ambient paths.

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

use crate::LoadError;

/// Outcome of looking up a file that is allowed to be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The file exists and was read.
    Found(T),
    /// The file does not exist.
    Absent,
}

/// Handle on the directory holding the JSON datasets.
#[derive(Debug)]
pub struct DataDir {
    root: Utf8PathBuf,
    dir: fs_utf8::Dir,
}

impl DataDir {
    /// Open an existing data directory.
    ///
    /// # Errors
    /// Returns [`LoadError::OpenDir`] when the directory cannot be opened.
    pub fn open(root: &Utf8Path) -> Result<Self, LoadError> {
        let dir = fs_utf8::Dir::open_ambient_dir(root, ambient_authority()).map_err(|source| {
            LoadError::OpenDir {
                path: root.to_path_buf(),
                source,
            }
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            dir,
        })
    }

    /// Open the data directory, creating it and any missing parents first.
    ///
    /// # Errors
    /// Returns [`LoadError::CreateDir`] when the directory cannot be created
    /// and [`LoadError::OpenDir`] when it cannot be opened afterwards.
    pub fn open_or_create(root: &Utf8Path) -> Result<Self, LoadError> {
        create_dir_all(root).map_err(|source| LoadError::CreateDir {
            path: root.to_path_buf(),
            source,
        })?;
        Self::open(root)
    }

    /// Path the directory was opened from.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Full path of `name` inside the directory, for diagnostics.
    #[must_use]
    pub fn file_path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Read `name` as UTF-8, reporting a missing file as [`Lookup::Absent`].
    ///
    /// # Errors
    /// Returns [`LoadError::Read`] for any failure other than the file not
    /// existing.
    pub fn read(&self, name: &str) -> Result<Lookup<String>, LoadError> {
        match self.dir.read_to_string(name) {
            Ok(contents) => Ok(Lookup::Found(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Lookup::Absent),
            Err(source) => Err(LoadError::Read {
                path: self.file_path(name),
                source,
            }),
        }
    }

    /// Create or truncate `name` and write `contents` to it.
    ///
    /// # Errors
    /// Returns [`LoadError::Write`] when the file cannot be written.
    pub fn write(&self, name: &str, contents: &[u8]) -> Result<(), LoadError> {
        self.dir
            .write(name, contents)
            .map_err(|source| LoadError::Write {
                path: self.file_path(name),
                source,
            })
    }
}

/// Create `path` and its parents, handling absolute paths safely for cap-std.
fn create_dir_all(path: &Utf8Path) -> io::Result<()> {
    let (anchor, below) = split_anchor(path);
    if below.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?.create_dir_all(&below)
}

/// Split `path` into the directory it hangs off and the part beneath it.
///
/// Absolute paths hang off their root (and drive prefix on Windows); relative
/// paths hang off the current directory.
pub(crate) fn split_anchor(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let (anchor_parts, below_parts): (Vec<Utf8Component<'_>>, Vec<Utf8Component<'_>>) =
        path.components().partition(|component| {
            matches!(component, Utf8Component::Prefix(_) | Utf8Component::RootDir)
        });
    let below: Utf8PathBuf = below_parts.into_iter().collect();
    if anchor_parts.is_empty() {
        return (Utf8PathBuf::from("."), below);
    }
    (anchor_parts.into_iter().collect(), below)
}
