//! Writes rendered families to disk.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension of every generated file.
pub const SOURCE_EXTENSION: &str = "java";

/// `<dir>/<family>.java`
pub fn output_path(dir: &Path, family: &str) -> PathBuf {
    dir.join(format!("{family}.{SOURCE_EXTENSION}"))
}

/// Creates or truncates the family's output file and writes `source` to it.
///
/// Missing parent directories are created.
pub fn write_family(dir: &Path, family: &str, source: &str) -> Result<PathBuf> {
    let path = output_path(dir, family);

    std::fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_owned(),
        source,
    })?;
    std::fs::write(&path, source).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = source.len(), "wrote family");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_family_name_with_extension() {
        assert_eq!(
            output_path(Path::new("out"), "Expression"),
            Path::new("out").join("Expression.java")
        );
    }

    #[test]
    fn overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_family(dir.path(), "Statement", "a much longer first version").unwrap();
        write_family(dir.path(), "Statement", "second").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = write_family(&nested, "Expression", "x").unwrap();
        assert_eq!(path, nested.join("Expression.java"));
        assert!(path.is_file());
    }

    #[test]
    fn reports_the_failing_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let err = write_family(&blocker, "Expression", "x").unwrap_err();
        match err {
            Error::Write { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }
}
