//! # modfile
//!
//! Converts a mod package's two input descriptor files into the single
//! combined `.mod` descriptor a dedicated server consumes.
//!
//! The crate is built around a small binary codec: the length-prefixed
//! "UE4-style" string primitive shared by all three file layouts, parsers
//! for the `mod.info` and `modmeta.info` inputs, and a writer that
//! re-serializes the parsed data into the output layout. [`convert`]
//! sequences the three and only produces output once both inputs have
//! parsed successfully.
//!
//! ## Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! // Reads <mods_root>/480444/mod.info and modmeta.info,
//! // writes <mods_root>/480444.mod atomically.
//! let output = modfile::convert(Path::new("/server/ShooterGame/Mods"), 480444)?;
//! ```
//!
//! Individual layouts are also exposed for working with raw bytes:
//!
//! ```
//! let info = modfile::ModInfo::parse(&[
//!     0x02, 0x00, 0x00, 0x00, b'X', 0x00, // display name, discarded
//!     0x00, 0x00, 0x00, 0x00, // zero maps
//! ])?;
//! assert!(info.map_names.is_empty());
//! # Ok::<(), modfile::Error>(())
//! ```

pub mod codec;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod info;
pub mod meta;
pub mod meta_map;
pub mod reader;
pub mod writer;

// Re-export main types
pub use convert::convert;
pub use descriptor::{FORMAT_SENTINEL, MAP_LIST_SENTINEL, MOD_NAME, MOD_TYPE_KEY, ModDescriptor};
pub use error::{Error, Result};
pub use info::ModInfo;
pub use meta::ModMeta;
pub use meta_map::MetaMap;
pub use reader::Reader;
pub use writer::Writer;
