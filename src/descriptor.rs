//! Combined `.mod` descriptor with read/write support.

use crate::codec;
use crate::error::{Error, Result};
use crate::meta_map::MetaMap;
use crate::reader::Reader;
use crate::writer::Writer;

/// Display name written into every descriptor, regardless of the name stored
/// in `mod.info`.
pub const MOD_NAME: &str = "ModName";

/// Sentinel written after the map list. Reverse-engineered from files
/// produced by the game's own tooling; meaning unknown.
pub const MAP_LIST_SENTINEL: u32 = 4_280_483_635; // 0xFF22FF33

/// Version-like sentinel following [`MAP_LIST_SENTINEL`]. Meaning unknown.
pub const FORMAT_SENTINEL: i32 = 2;

/// Metadata key whose presence sets the mod-type flag byte.
pub const MOD_TYPE_KEY: &str = "ModType";

/// The combined descriptor assembled from `mod.info` and `modmeta.info`.
///
/// Built empty, filled by the two parse steps, then serialized once with
/// [`ModDescriptor::write`].
#[derive(Debug, Clone, Default)]
pub struct ModDescriptor {
    /// Numeric mod identifier, supplied externally (not read from any file).
    pub mod_id: i32,
    /// Map names in `mod.info` order.
    pub map_names: Vec<String>,
    /// Metadata pairs in `modmeta.info` order.
    pub meta: MetaMap,
}

impl ModDescriptor {
    /// Serialize the descriptor into the `.mod` byte layout.
    #[must_use]
    pub fn write(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        self.write_to(&mut writer);
        writer.into_inner()
    }

    /// Serialize the descriptor to a writer.
    pub fn write_to(&self, writer: &mut Writer) {
        writer.write_i32(self.mod_id);
        writer.write_bytes(&[0, 0, 0, 0]);

        codec::write_string(writer, MOD_NAME);
        codec::write_string(writer, "");

        writer.write_i32(self.map_names.len() as i32);
        for map in &self.map_names {
            codec::write_string(writer, map);
        }

        writer.write_u32(MAP_LIST_SENTINEL);
        writer.write_i32(FORMAT_SENTINEL);

        // Single raw flag byte, no length prefix.
        let flag = if self.meta.contains_key(MOD_TYPE_KEY) {
            b'1'
        } else {
            b'0'
        };
        writer.write_u8(flag);

        writer.write_i32(self.meta.len() as i32);
        for (key, value) in &self.meta {
            codec::write_string(writer, key);
            codec::write_string(writer, value);
        }
    }

    /// Parse a `.mod` file back into a descriptor.
    ///
    /// The inverse of [`ModDescriptor::write`]: the fixed display name and
    /// empty description fields are read and discarded, and both sentinel
    /// fields are validated.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(data);

        let mod_id = reader.read_i32()?;
        reader.read_bytes(4)?;

        codec::read_string(&mut reader)?;
        codec::read_string(&mut reader)?;

        let map_count = reader.read_i32()?;
        let mut map_names = Vec::new();
        for _ in 0..map_count {
            let name = codec::read_string(&mut reader)?;
            if !name.is_empty() {
                map_names.push(name);
            }
        }

        let offset = reader.position();
        let sentinel = reader.read_u32()?;
        if sentinel != MAP_LIST_SENTINEL {
            return Err(Error::InvalidSentinel {
                offset,
                expected: MAP_LIST_SENTINEL,
                found: sentinel,
            });
        }
        let offset = reader.position();
        let version = reader.read_i32()?;
        if version != FORMAT_SENTINEL {
            return Err(Error::InvalidSentinel {
                offset,
                expected: FORMAT_SENTINEL as u32,
                found: version as u32,
            });
        }

        // Flag byte is derived from the metadata on write; skipped here.
        reader.read_u8()?;

        let pair_count = reader.read_i32()?;
        let mut meta = MetaMap::new();
        for _ in 0..pair_count {
            let key = codec::read_string(&mut reader)?;
            let value = codec::read_string(&mut reader)?;
            meta.insert(key, value);
        }

        Ok(Self {
            mod_id,
            map_names,
            meta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModDescriptor {
        let mut meta = MetaMap::new();
        meta.insert("ModType", "1");
        ModDescriptor {
            mod_id: 5,
            map_names: vec!["MapA".to_string()],
            meta,
        }
    }

    #[test]
    fn test_exact_byte_layout() {
        let mut expected = Vec::new();
        expected.extend_from_slice(&5i32.to_le_bytes());
        expected.extend_from_slice(&[0, 0, 0, 0]);
        expected.extend_from_slice(b"\x08\x00\x00\x00ModName\x00");
        expected.extend_from_slice(b"\x01\x00\x00\x00\x00");
        expected.extend_from_slice(&1i32.to_le_bytes());
        expected.extend_from_slice(b"\x05\x00\x00\x00MapA\x00");
        expected.extend_from_slice(&0xFF22_FF33u32.to_le_bytes());
        expected.extend_from_slice(&2i32.to_le_bytes());
        expected.push(b'1');
        expected.extend_from_slice(&1i32.to_le_bytes());
        expected.extend_from_slice(b"\x08\x00\x00\x00ModType\x00");
        expected.extend_from_slice(b"\x02\x00\x00\x001\x00");

        assert_eq!(sample().write(), expected);
    }

    #[test]
    fn test_flag_byte_without_mod_type() {
        let descriptor = ModDescriptor {
            mod_id: 1,
            ..Default::default()
        };
        let data = descriptor.write();
        let parsed = ModDescriptor::parse(&data).unwrap();
        assert!(parsed.meta.is_empty());

        // Flag byte sits right after the two sentinels; with no maps and no
        // metadata the layout up to it is fixed-size.
        let flag_at = 4 + 4 + 12 + 5 + 4 + 4 + 4;
        assert_eq!(data[flag_at], b'0');
    }

    #[test]
    fn test_write_parse_round_trip() {
        let mut meta = MetaMap::new();
        meta.insert("ModType", "1");
        meta.insert("GameModId", "480444");
        let descriptor = ModDescriptor {
            mod_id: 480444,
            map_names: vec!["TheIsland".to_string(), "Ragnarok".to_string()],
            meta,
        };

        let parsed = ModDescriptor::parse(&descriptor.write()).unwrap();
        assert_eq!(parsed.mod_id, 480444);
        assert_eq!(parsed.map_names, descriptor.map_names);
        let entries: Vec<_> = parsed.meta.iter().collect();
        assert_eq!(entries, vec![("ModType", "1"), ("GameModId", "480444")]);
    }

    #[test]
    fn test_parse_rejects_bad_sentinel() {
        let mut data = sample().write();
        // Corrupt the first sentinel (after id, pad, name, empty string,
        // map count, and one map entry).
        let sentinel_at = 4 + 4 + 12 + 5 + 4 + 9;
        data[sentinel_at..sentinel_at + 4].copy_from_slice(&[0, 0, 0, 0]);
        assert!(matches!(
            ModDescriptor::parse(&data).unwrap_err(),
            Error::InvalidSentinel { found: 0, .. }
        ));
    }
}
