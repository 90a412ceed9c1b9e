use crate::error::{PackagerError, SelectionError};
use std::path::Path;

/// 空路徑（取消選擇）與不存在的路徑同樣視為無效
pub fn validate_input_file(path: &Path) -> Result<(), SelectionError> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(SelectionError::InputMissing {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

pub fn validate_directory_exists(path: &Path) -> Result<(), SelectionError> {
    if path.as_os_str().is_empty() || !path.is_dir() {
        return Err(SelectionError::OutputMissing {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<(), PackagerError> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| PackagerError::io(path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_empty_selection_is_rejected() {
        assert!(validate_input_file(&PathBuf::new()).is_err());
        assert!(validate_directory_exists(&PathBuf::new()).is_err());
    }

    #[test]
    fn test_input_must_be_a_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            validate_input_file(dir.path()),
            Err(SelectionError::InputMissing { .. })
        ));

        let file = dir.path().join("movie.mp4");
        std::fs::write(&file, b"data").unwrap();
        assert!(validate_input_file(&file).is_ok());
        assert!(matches!(
            validate_directory_exists(&file),
            Err(SelectionError::OutputMissing { .. })
        ));
    }

    #[test]
    fn test_ensure_directory_exists_creates_nested() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("project").join("720p");
        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_directory_exists(&nested).unwrap();
    }
}
