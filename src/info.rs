//! `mod.info` parsing.

use log::debug;

use crate::codec;
use crate::error::Result;
use crate::reader::Reader;

/// Parsed contents of a `mod.info` file.
///
/// The file stores a display name followed by a counted list of map names.
/// The display name is read but not kept: the output format always
/// substitutes a fixed placeholder (see [`crate::descriptor::MOD_NAME`]).
#[derive(Debug, Clone, Default)]
pub struct ModInfo {
    /// Map names in file order, empty entries skipped.
    pub map_names: Vec<String>,
}

impl ModInfo {
    /// Parse a `mod.info` file from raw bytes.
    ///
    /// Layout: one length-prefixed display name, a little-endian i32 map
    /// count, then that many length-prefixed map names. Entries that decode
    /// to the empty string consume their slot in the count but are not kept.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(data);

        // Display name, discarded.
        codec::read_string(&mut reader)?;

        let map_count = reader.read_i32()?;
        let mut map_names = Vec::new();
        for _ in 0..map_count {
            let name = codec::read_string(&mut reader)?;
            if !name.is_empty() {
                map_names.push(name);
            }
        }

        debug!("parsed mod.info: {} map(s)", map_names.len());
        Ok(Self { map_names })
    }
}
