//! `modmeta.info` parsing.

use log::debug;

use crate::codec;
use crate::error::Result;
use crate::meta_map::MetaMap;
use crate::reader::Reader;

/// Parsed contents of a `modmeta.info` file.
#[derive(Debug, Clone, Default)]
pub struct ModMeta {
    /// Key/value pairs in file order, last write wins on duplicate keys.
    pub entries: MetaMap,
}

impl ModMeta {
    /// Parse a `modmeta.info` file from raw bytes.
    ///
    /// Layout: a little-endian i32 pair count, then per pair a
    /// length-prefixed key and a length-prefixed value. A pair is kept only
    /// when both key and value decode non-empty; a present key with an
    /// absent value is dropped, matching the producing format.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(data);

        let pair_count = reader.read_i32()?;
        let mut entries = MetaMap::new();
        for _ in 0..pair_count {
            let key = codec::read_string(&mut reader)?;
            let value = codec::read_string(&mut reader)?;
            if !key.is_empty() && !value.is_empty() {
                entries.insert(key, value);
            }
        }

        debug!(
            "parsed modmeta.info: {} of {} pair(s) kept",
            entries.len(),
            pair_count
        );
        Ok(Self { entries })
    }
}
