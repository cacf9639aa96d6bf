use crate::PatchErrorKind;

/// Byte offset of the 4-byte track length field in a single-track file.
pub const TRACK_LENGTH_OFFSET: u64 = 18;

/// Size of the single-track header up to and including the length
/// field. Event data starts here.
pub const TRACK_DATA_START: u64 = 22;

#[doc = r#"
The length of a track chunk's event data, held as the 4 big-endian
bytes stored on disk.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackLength {
    inner: [u8; 4],
}

impl TrackLength {
    /// Create a length from a byte count of event data.
    pub const fn new(event_bytes: u32) -> Self {
        Self {
            inner: event_bytes.to_be_bytes(),
        }
    }

    /// Interpret 4 bytes read from the length field.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self { inner: bytes }
    }

    /// Derive the length implied by a file's total size.
    ///
    /// Everything past the fixed header is event data, so this is the
    /// file size minus [`TRACK_DATA_START`]. Files too small to hold
    /// the header, or too large for the value to fit in 4 bytes, are
    /// rejected.
    pub fn from_file_size(file_size: u64) -> Result<Self, PatchErrorKind> {
        if file_size < TRACK_DATA_START {
            return Err(PatchErrorKind::TooShort(file_size));
        }
        let event_bytes = file_size - TRACK_DATA_START;
        if event_bytes > u32::MAX as u64 {
            return Err(PatchErrorKind::TooLong(event_bytes));
        }
        Ok(Self::new(event_bytes as u32))
    }

    /// Returns the number of bytes of event data.
    pub const fn event_bytes(&self) -> u32 {
        u32::from_be_bytes(self.inner)
    }

    /// The field as stored on disk, most significant byte first.
    pub const fn to_bytes(&self) -> [u8; 4] {
        self.inner
    }
}

#[test]
fn byte_round_trip() {
    use pretty_assertions::assert_eq;
    for value in [0u32, 1, 78, 0x0102_0304, u32::MAX] {
        let length = TrackLength::new(value);
        assert_eq!(TrackLength::from_bytes(length.to_bytes()), length);
        assert_eq!(length.event_bytes(), value);
    }
}

#[test]
fn length_from_file_size() {
    use pretty_assertions::assert_eq;
    // A header-only file has no event data.
    assert_eq!(TrackLength::from_file_size(22).unwrap(), TrackLength::new(0));
    assert_eq!(
        TrackLength::from_file_size(100).unwrap().to_bytes(),
        [0x00, 0x00, 0x00, 0x4E]
    );
    assert_eq!(
        TrackLength::from_file_size(22 + u32::MAX as u64).unwrap(),
        TrackLength::new(u32::MAX)
    );
}

#[test]
fn invalid_file_sizes() {
    let err = TrackLength::from_file_size(21).unwrap_err();
    assert!(matches!(err, PatchErrorKind::TooShort(21)));

    let err = TrackLength::from_file_size(23 + u32::MAX as u64).unwrap_err();
    assert!(matches!(err, PatchErrorKind::TooLong(n) if n == u32::MAX as u64 + 1));
}
