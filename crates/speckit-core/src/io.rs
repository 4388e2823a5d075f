use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents partial writes from corrupting artifact files.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write a file only if it does not already exist. Returns true if written.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}

/// Copy a template file verbatim to `dest`. Templates are never parsed.
///
/// If the template is absent, an empty destination file is created so
/// downstream commands still have a file to edit. Returns true when the
/// template itself was copied.
pub fn copy_template(template: &Path, dest: &Path) -> Result<bool> {
    if template.exists() {
        let content = std::fs::read(template)?;
        atomic_write(dest, &content)?;
        Ok(true)
    } else {
        tracing::warn!(template = %template.display(), "template not found, creating empty file");
        atomic_write(dest, b"")?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spec.md");
        atomic_write(&path, b"# Spec").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Spec");
    }

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("specs/001-auth/spec.md");
        atomic_write(&path, b"data").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_if_missing_skips_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.md");
        std::fs::write(&path, b"original").unwrap();
        assert!(!write_if_missing(&path, b"new").unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn copy_template_copies_verbatim() {
        let dir = TempDir::new().unwrap();
        let tpl = dir.path().join("spec-template.md");
        std::fs::write(&tpl, "## User Scenarios\n[fill in]\n").unwrap();
        let dest = dir.path().join("specs/001-x/spec.md");
        assert!(copy_template(&tpl, &dest).unwrap());
        assert_eq!(
            std::fs::read_to_string(&dest).unwrap(),
            "## User Scenarios\n[fill in]\n"
        );
    }

    #[test]
    fn copy_template_missing_creates_empty_dest() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("spec.md");
        assert!(!copy_template(&dir.path().join("nope.md"), &dest).unwrap());
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "");
    }
}
