//! Length-prefixed string codec shared by all three descriptor layouts.
//!
//! Strings are stored as a signed 32-bit byte length followed by that many
//! bytes, the payload carrying a mandatory trailing NUL. A negative length is
//! a wide-string marker; this format is never produced with wide strings, so
//! a flagged field decodes to the empty string.

use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::writer::Writer;

/// Encode `text` as a length-prefixed string.
///
/// Emits `utf8_len(text) + 1` as a little-endian i32, the UTF-8 bytes, and a
/// single NUL terminator. Any string, including the empty one, is encodable.
pub fn write_string(writer: &mut Writer, text: &str) {
    let bytes = text.as_bytes();
    writer.write_i32(bytes.len() as i32 + 1);
    writer.write_bytes(bytes);
    writer.write_u8(0);
}

/// Decode a length-prefixed string from the reader.
///
/// A negative length field is the wide-string marker: the field decodes to
/// the empty string and no payload bytes are consumed, even though the stored
/// magnitude would be `length - 1`. A zero length likewise yields the empty
/// string. Otherwise exactly `length` bytes are read and the trailing NUL is
/// dropped.
///
/// # Errors
///
/// [`Error::UnexpectedEof`] if the declared length exceeds the remaining
/// bytes, [`Error::InvalidString`] if the payload is not valid UTF-8.
pub fn read_string(reader: &mut Reader<'_>) -> Result<String> {
    let count = reader.read_i32()?;

    if count < 0 {
        // Wide-string marker: the flagged branch never consumes payload,
        // unlike the zero-length case which is also empty but unflagged.
        return Ok(String::new());
    }
    if count == 0 {
        return Ok(String::new());
    }

    let start = reader.position();
    let bytes = reader.read_bytes(count as usize)?;
    let payload = &bytes[..bytes.len() - 1];
    std::str::from_utf8(payload)
        .map(str::to_owned)
        .map_err(|_| Error::InvalidString(start))
}

/// Encode `text` to a standalone byte vector.
#[must_use]
pub fn encode(text: &str) -> Vec<u8> {
    let mut writer = Writer::new();
    write_string(&mut writer, text);
    writer.into_inner()
}
