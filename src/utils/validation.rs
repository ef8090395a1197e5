// file: src/utils/validation.rs
// description: document id validation and path safety helpers
// reference: input validation patterns

use crate::error::{Result, ViewerError};
use std::path::{Component, Path, PathBuf};

pub struct Validator;

impl Validator {
    /// Normalize a caller-supplied document id to forward slashes.
    pub fn sanitize_doc_id(doc_id: &str) -> String {
        doc_id.replace('\\', "/").trim().to_string()
    }

    /// Resolve a document id against the root, rejecting ids that escape it.
    ///
    /// The containment check is lexical: `.` and `..` components are folded
    /// without touching the filesystem, so traversal attempts are rejected
    /// before any read and regardless of whether the target exists.
    pub fn resolve_doc_path(root: &Path, doc_id: &str) -> Result<PathBuf> {
        let sanitized = Self::sanitize_doc_id(doc_id);
        let joined = root.join(&sanitized);
        let normalized = Self::normalize(&joined);
        let root_normalized = Self::normalize(root);

        if !normalized.starts_with(&root_normalized) {
            return Err(ViewerError::AccessDenied {
                doc_id: doc_id.to_string(),
            });
        }

        Ok(normalized)
    }

    fn normalize(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();

        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    // Popping past the top leaves the path outside any root.
                    if !normalized.pop() {
                        normalized = PathBuf::from("..");
                    }
                }
                other => normalized.push(other),
            }
        }

        normalized
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ViewerError::Config(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(ViewerError::Config(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_doc_id() {
        assert_eq!(
            Validator::sanitize_doc_id("dir\\file.pdf"),
            "dir/file.pdf"
        );
        assert_eq!(
            Validator::sanitize_doc_id("  dir/file.pdf  "),
            "dir/file.pdf"
        );
    }

    #[test]
    fn test_resolve_inside_root() {
        let root = Path::new("/srv/papers");
        let resolved = Validator::resolve_doc_path(root, "2023年12月CET6真题/reading.pdf").unwrap();
        assert_eq!(
            resolved,
            PathBuf::from("/srv/papers/2023年12月CET6真题/reading.pdf")
        );
    }

    #[test]
    fn test_traversal_rejected_without_filesystem_access() {
        let root = Path::new("/srv/papers");
        let result = Validator::resolve_doc_path(root, "../../etc/passwd");
        assert!(matches!(result, Err(ViewerError::AccessDenied { .. })));
    }

    #[test]
    fn test_interior_dotdot_within_root_allowed() {
        let root = Path::new("/srv/papers");
        let resolved = Validator::resolve_doc_path(root, "a/../b.pdf").unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/papers/b.pdf"));
    }

    #[test]
    fn test_dotdot_escaping_then_reentering_is_fine() {
        let root = Path::new("/srv/papers");
        // Escapes one level then comes back; the folded result stays inside.
        let resolved = Validator::resolve_doc_path(root, "../papers/x.pdf").unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/papers/x.pdf"));
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }
}
