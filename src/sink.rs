//! Destinations for the encoded document.
//!
//! A sink receives the full document in a single `replace` call and must
//! either store all of it or leave the previous content in place.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Sink {
    /// Human readable identifier of the destination, used in errors
    fn target(&self) -> String;

    /// Replace whatever the destination holds with `contents`
    fn replace(&mut self, contents: &[u8]) -> io::Result<()>;
}

/// Writes to a file path by renaming a fully written temp file over it.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the bytes actually land.
    ///
    /// An existing target is resolved through symlinks so the linked file is
    /// replaced rather than the link. A missing target is used as given.
    fn resolved_target(&self) -> io::Result<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(path) => Ok(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(e),
        }
    }
}

fn staging_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Temp file next to `target`, created with the mode a plain create would get
fn staging_file(target: &Path) -> io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // masked by the process umask, like fs::File::create
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(staging_dir(target))
}

impl Sink for FileSink {
    fn target(&self) -> String {
        self.path.display().to_string()
    }

    fn replace(&mut self, contents: &[u8]) -> io::Result<()> {
        let target = self.resolved_target()?;
        let existing = fs::metadata(&target).ok().map(|m| m.permissions());

        // Staging in the target directory keeps the rename on one filesystem
        let mut tmp = staging_file(&target)?;
        tmp.write_all(contents)?;
        tmp.flush()?;
        if let Some(permissions) = existing {
            tmp.as_file().set_permissions(permissions)?;
        }
        tmp.as_file().sync_all()?;

        // On failure the temp file is dropped and removed
        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Writes the document to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn target(&self) -> String {
        "<stdout>".to_string()
    }

    fn replace(&mut self, contents: &[u8]) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(contents)?;
        lock.write_all(b"\n")?;
        lock.flush()
    }
}

/// In-memory sink, handy for tests and benchmarks
impl Sink for Vec<u8> {
    fn target(&self) -> String {
        "<memory>".to_string()
    }

    fn replace(&mut self, contents: &[u8]) -> io::Result<()> {
        self.clear();
        self.extend_from_slice(contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user_list.json");

        let mut sink = FileSink::new(&path);
        sink.replace(b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_file_sink_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user_list.json");
        fs::write(&path, "old content that is longer than the new one").unwrap();

        let mut sink = FileSink::new(&path);
        sink.replace(b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_file_sink_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("user_list.json");

        let mut sink = FileSink::new(&path);
        assert!(sink.replace(b"{}").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_file_sink_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");

        FileSink::new(&path).replace(b"[]").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_file_sink_failed_replace_keeps_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("user_list.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), b"prior").unwrap();

        let mut sink = FileSink::new(&target);
        assert!(sink.replace(b"{}").is_err());

        assert!(target.is_dir());
        assert_eq!(fs::read(target.join("keep.txt")).unwrap(), b"prior");
        let names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["user_list.json".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_sink_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user_list.json");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        FileSink::new(&path).replace(b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_sink_new_file_is_not_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("user_list.json");
        let reference = temp_dir.path().join("reference");
        fs::File::create(&reference).unwrap();

        FileSink::new(&path).replace(b"{}").unwrap();

        // same mode a plain create gets under the current umask
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_sink_follows_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("user_list.json");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        FileSink::new(&link).replace(b"new").unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(fs::symlink_metadata(&link)
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(fs::read_to_string(&link).unwrap(), "new");
    }

    #[test]
    fn test_memory_sink_replaces() {
        let mut sink: Vec<u8> = b"stale".to_vec();
        sink.replace(b"fresh").unwrap();
        assert_eq!(sink, b"fresh");
    }
}
