//! Executable lookup in the command search path

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::is_debug;

/// Check whether a path is a regular file the current user may execute
pub fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = path.metadata() else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Find `name` in the directories of `search_path`
///
/// Names containing a path separator are checked as given. Empty search path
/// entries are skipped. The returned path is absolute.
pub fn find_executable(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.contains(std::path::MAIN_SEPARATOR) {
        let candidate = Path::new(name);
        return is_executable(candidate).then(|| absolutize(candidate));
    }

    let search_path = search_path?;
    for dir in std::env::split_paths(search_path) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            if is_debug() {
                eprintln!("[DEBUG] Found {} at {}", name, candidate.display());
            }
            return Some(absolutize(&candidate));
        }
    }

    if is_debug() {
        eprintln!("[DEBUG] {} not found in search path", name);
    }
    None
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_finds_first_match_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_file(second.path(), "java", 0o755);
        let expected = write_file(first.path(), "java", 0o755);

        let search = std::env::join_paths([first.path(), second.path()]).unwrap();
        assert_eq!(find_executable("java", Some(search.as_os_str())), Some(expected));
    }

    #[test]
    fn test_skips_non_executable_files() {
        let plain = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        write_file(plain.path(), "java", 0o644);
        let expected = write_file(bin.path(), "java", 0o700);

        let search = std::env::join_paths([plain.path(), bin.path()]).unwrap();
        assert_eq!(find_executable("java", Some(search.as_os_str())), Some(expected));
    }

    #[test]
    fn test_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("java")).unwrap();
        let search = dir.path().as_os_str().to_owned();
        assert_eq!(find_executable("java", Some(search.as_os_str())), None);
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new().unwrap();
        let search = dir.path().as_os_str().to_owned();
        assert_eq!(find_executable("java", Some(search.as_os_str())), None);
        assert_eq!(find_executable("java", None), None);
    }

    #[test]
    fn test_path_with_separator_checked_directly() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "java", 0o755);
        let name = path.to_string_lossy().to_string();
        assert_eq!(find_executable(&name, None), Some(path));
    }

    #[test]
    fn test_result_is_absolute() {
        let found = find_executable("sh", Some(OsStr::new("/bin:/usr/bin")));
        assert!(found.map(|p| p.is_absolute()).unwrap_or(true));
    }
}
