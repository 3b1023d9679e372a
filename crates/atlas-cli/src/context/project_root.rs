use std::path::{Path, PathBuf};

use atlas_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.atlas` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Project root for `start`: the nearest ancestor with `.atlas`, else `start`.
#[must_use]
pub fn project_root_or_start(start: &Path) -> PathBuf {
    find_project_root(start).unwrap_or_else(|| start.to_path_buf())
}
