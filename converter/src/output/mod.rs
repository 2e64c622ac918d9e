//! Output directory handling and per-zone file writes.
//!
//! Layout for input `data/monsters.json` and root `output`:
//!
//! ```text
//! output/
//! └── monsters/
//!     ├── 100.lua
//!     └── 103.lua
//! ```

use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use tokio::fs;

use crate::error::{OutputError, OutputResult};
use crate::logs::{log_info, log_info_indent};
use crate::models::ZoneId;

/// Extension of zone data files.
pub const LUA_EXTENSION: &str = "lua";

/// `<root>/<input file stem>`.
pub fn output_dir(root: &Path, input: &Path) -> OutputResult<PathBuf> {
    let stem = input
        .file_stem()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| OutputError::NoFileStem(input.to_path_buf()))?;
    Ok(root.join(stem))
}

/// File name for a zone, e.g. `103.lua`.
pub fn zone_file_name(zone: ZoneId) -> String {
    format!("{}.{}", zone, LUA_EXTENSION)
}

/// Remove `dir` if it exists, then create it empty.
pub async fn prepare_dir(dir: &Path) -> OutputResult<()> {
    let io_err = |source| OutputError::Io {
        path: dir.to_path_buf(),
        source,
    };

    if fs::try_exists(dir).await.map_err(io_err)? {
        log_info(format!("Cleaning previous output directory [{}]", dir.display()));
        fs::remove_dir_all(dir).await.map_err(io_err)?;
    }

    log_info(format!("Creating new output directory [{}]", dir.display()));
    fs::create_dir_all(dir).await.map_err(io_err)?;
    Ok(())
}

async fn write_file(path: PathBuf, contents: &str) -> OutputResult<PathBuf> {
    fs::write(&path, contents)
        .await
        .map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;
    log_info_indent(format!("Wrote {}", path.display()), 1);
    Ok(path)
}

/// Write one file per zone into `dir`, concurrently.
///
/// Returns the written paths in input order. The first failure aborts;
/// files already written stay on disk.
pub async fn write_zone_files<'a, I>(dir: &Path, files: I) -> OutputResult<Vec<PathBuf>>
where
    I: IntoIterator<Item = (ZoneId, &'a str)>,
{
    let writes = files
        .into_iter()
        .map(|(zone, contents)| write_file(dir.join(zone_file_name(zone)), contents));
    try_join_all(writes).await
}
