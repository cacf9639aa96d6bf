use std::path::{Path, PathBuf};
use std::{fs, io};

/// Name fragment that marks a file as a patch candidate.
///
/// Matched case-sensitively anywhere in the name, so `song.MID`,
/// `song.MIDI` and `old.MID.broken` all qualify while `notes.mid`
/// does not.
pub const NAME_FILTER: &str = ".MID";

/// True for names that [`candidates`] would select.
pub fn is_candidate_name(name: &str) -> bool {
    name.contains(NAME_FILTER)
}

/// List the regular files directly under `dir` whose names contain
/// [`NAME_FILTER`], sorted by path.
///
/// Subdirectories are never descended into or returned.
pub fn candidates(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if is_candidate_name(&entry.file_name().to_string_lossy()) {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}

#[test]
fn candidate_names() {
    assert!(is_candidate_name("song.MID"));
    assert!(is_candidate_name("song.MIDI"));
    assert!(is_candidate_name("old.MID.broken"));
    assert!(!is_candidate_name("notes.mid"));
    assert!(!is_candidate_name("notes.Mid"));
    assert!(!is_candidate_name("README"));
}
