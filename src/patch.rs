use std::fs::{self, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::{PatchError, PatchErrorKind, PatchResult, TRACK_LENGTH_OFFSET, TrackLength};

#[doc = r#"
Rewrites the track length field of single-track MIDI files in place.

The correct length is derived from the file size alone; the
surrounding chunk structure is neither parsed nor validated. On
success only the 4 length bytes change and the rest of the file is
left as it was.
"#]
#[derive(Debug, Clone, Copy, Default)]
pub struct Patcher {
    dry_run: bool,
    backup: bool,
}

/// The outcome of patching one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    /// The file the patch was applied to.
    pub path: PathBuf,
    /// The length derived from the file's size.
    pub length: TrackLength,
    /// False when the run was a dry run and no bytes were written.
    pub written: bool,
}

impl Patcher {
    /// Create a patcher that writes in place with no backup.
    pub const fn new() -> Self {
        Self {
            dry_run: false,
            backup: false,
        }
    }

    /// Compute and report lengths without touching any file.
    pub const fn dry_run(mut self, on: bool) -> Self {
        self.dry_run = on;
        self
    }

    /// Copy each file to `<name>.bak` before writing to it.
    pub const fn backup(mut self, on: bool) -> Self {
        self.backup = on;
        self
    }

    /// Patch a single file.
    ///
    /// A file that fails validation is left byte-identical. The write
    /// never truncates: the file is opened read-write and only the 4
    /// bytes at [`TRACK_LENGTH_OFFSET`] are replaced.
    pub fn patch(&self, path: &Path) -> PatchResult<Patched> {
        let meta = fs::metadata(path).map_err(|e| PatchError::io(path, e))?;
        if !meta.is_file() {
            return Err(PatchError::new(path, PatchErrorKind::NotAFile));
        }
        let length =
            TrackLength::from_file_size(meta.len()).map_err(|kind| PatchError::new(path, kind))?;

        if self.dry_run {
            return Ok(Patched {
                path: path.to_owned(),
                length,
                written: false,
            });
        }

        if self.backup {
            let backup = backup_path(path);
            fs::copy(path, &backup).map_err(|e| PatchError::io(path, e))?;
            log::debug!("copied {} to {}", path.display(), backup.display());
        }

        let mut file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| PatchError::io(path, e))?;
        file.seek(SeekFrom::Start(TRACK_LENGTH_OFFSET))
            .map_err(|e| PatchError::io(path, e))?;
        file.write_all(&length.to_bytes())
            .map_err(|e| PatchError::io(path, e))?;

        Ok(Patched {
            path: path.to_owned(),
            length,
            written: true,
        })
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
