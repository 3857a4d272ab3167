//! Navigation file location.

use std::path::{Path, PathBuf};

/// Candidate locations for the navigation file.
///
/// Probes, in order: the base directory, the running binary's directory,
/// then every ancestor of the base directory. The first existing file wins.
/// When nothing exists the base directory candidate is returned, so a later
/// save creates the file there.
#[derive(Clone, Debug)]
pub struct ConfigPathProbe {
    relative: PathBuf,
    base_dir: PathBuf,
    exe_dir: Option<PathBuf>,
}

impl ConfigPathProbe {
    /// Probe `relative` under explicit directories.
    #[must_use]
    pub fn new(
        relative: impl Into<PathBuf>,
        base_dir: impl Into<PathBuf>,
        exe_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            relative: relative.into(),
            base_dir: base_dir.into(),
            exe_dir,
        }
    }

    /// Probe `relative` under the working directory and the binary's directory.
    #[must_use]
    pub fn from_env(relative: impl Into<PathBuf>) -> Self {
        let base_dir = std::env::current_dir().unwrap_or_default();
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::new(relative, base_dir, exe_dir)
    }

    /// Candidate paths in probing order.
    pub fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        std::iter::once(self.base_dir.join(&self.relative))
            .chain(self.exe_dir.iter().map(|dir| dir.join(&self.relative)))
            .chain(
                self.base_dir
                    .ancestors()
                    .skip(1)
                    .map(|dir| dir.join(&self.relative)),
            )
    }

    /// Resolve the navigation file path.
    #[must_use]
    pub fn resolve(&self) -> PathBuf {
        if self.relative.is_absolute() {
            return self.relative.clone();
        }

        if let Some(found) = self.candidates().find(|candidate| candidate.is_file()) {
            tracing::debug!(path = %found.display(), "Navigation file found");
            return found;
        }

        self.base_dir.join(&self.relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELATIVE: &str = "Config/NavigationConfig.xml";

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "<Navigation/>").unwrap();
    }

    #[test]
    fn test_base_directory_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("app");
        let exe = dir.path().join("bin");
        touch(&base.join(RELATIVE));
        touch(&exe.join(RELATIVE));

        let probe = ConfigPathProbe::new(RELATIVE, &base, Some(exe));
        assert_eq!(probe.resolve(), base.join(RELATIVE));
    }

    #[test]
    fn test_binary_directory_second() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("app");
        let exe = dir.path().join("bin");
        std::fs::create_dir_all(&base).unwrap();
        touch(&exe.join(RELATIVE));
        touch(&dir.path().join(RELATIVE));

        let probe = ConfigPathProbe::new(RELATIVE, &base, Some(exe.clone()));
        assert_eq!(probe.resolve(), exe.join(RELATIVE));
    }

    #[test]
    fn test_ancestor_directory_found() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("target").join("debug");
        std::fs::create_dir_all(&base).unwrap();
        touch(&dir.path().join(RELATIVE));

        let probe = ConfigPathProbe::new(RELATIVE, &base, None);
        assert_eq!(probe.resolve(), dir.path().join(RELATIVE));
    }

    #[test]
    fn test_missing_returns_first_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("app");

        let probe = ConfigPathProbe::new("Nowhere/nav-test-missing.xml", &base, None);
        assert_eq!(probe.resolve(), base.join("Nowhere/nav-test-missing.xml"));
    }

    #[test]
    fn test_absolute_path_used_directly() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("custom.xml");

        let probe = ConfigPathProbe::new(&absolute, "/elsewhere", None);
        assert_eq!(probe.resolve(), absolute);
    }

    #[test]
    fn test_candidate_order() {
        let probe = ConfigPathProbe::new("n.xml", "/a/b", Some(PathBuf::from("/bin")));
        let candidates: Vec<_> = probe.candidates().collect();
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/a/b/n.xml"),
                PathBuf::from("/bin/n.xml"),
                PathBuf::from("/a/n.xml"),
                PathBuf::from("/n.xml"),
            ]
        );
    }
}
