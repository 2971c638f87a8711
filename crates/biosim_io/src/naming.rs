//! Output file names derived from a run's output stem.

use crate::error::{IoError, Result};
use std::path::{Path, PathBuf};

/// `<stem>.<year:05>.<ext>`, e.g. `out/island.00010.dyr`.
pub fn numbered(stem: &Path, year: u32, ext: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(format!(".{year:05}.{ext}"));
    PathBuf::from(name)
}

/// `<stem>.<ext>`, e.g. `out/island.dat`.
pub fn with_extension(stem: &Path, ext: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(format!(".{ext}"));
    PathBuf::from(name)
}

/// Creates the directory the stem's files land in.
pub fn create_output_dir(stem: &Path) -> Result<()> {
    match stem.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir).map_err(|e| {
            IoError::from(e).with_context(format!("Could not create {}", dir.display()))
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_pads_year() {
        assert_eq!(
            numbered(Path::new("out/island"), 10, "dyr"),
            PathBuf::from("out/island.00010.dyr")
        );
        assert_eq!(
            numbered(Path::new("run"), 123456, "pop"),
            PathBuf::from("run.123456.pop")
        );
    }

    #[test]
    fn test_stem_with_dots_is_kept_whole() {
        assert_eq!(
            with_extension(Path::new("out/v1.2"), "dat"),
            PathBuf::from("out/v1.2.dat")
        );
    }

    #[test]
    fn test_create_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("a/b/run");
        create_output_dir(&stem).unwrap();
        assert!(dir.path().join("a/b").is_dir());
        create_output_dir(Path::new("bare")).unwrap();
    }
}
