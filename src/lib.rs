#![doc = r#"
In-place repair of the track length field in single-track MIDI files.

A single-track file carries a fixed 22-byte preamble: the 14-byte
header chunk followed by the track chunk's 4-character identifier and
its 4-byte big-endian length. Everything after that preamble is track
event data, so the correct length is always the file size minus 22.
Tools that append or strip events without rewriting the header leave a
stale value behind; this crate recomputes it from the size alone and
overwrites the 4 bytes at offset 18, leaving every other byte
untouched.

The chunk structure is trusted, not parsed: signatures and declared
sizes are never validated, and multi-track files are out of scope.
"#]

mod error;
pub use error::*;

mod length;
pub use length::*;

mod patch;
pub use patch::*;

mod scan;
pub use scan::*;
