//! Conversion pipeline: two input descriptors in, one `.mod` file out.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::descriptor::ModDescriptor;
use crate::error::{Error, Result};
use crate::info::ModInfo;
use crate::meta::ModMeta;

/// Convert one mod's input descriptors into its combined `.mod` file.
///
/// Reads `<mods_root>/<mod_id>/mod.info` and `<mods_root>/<mod_id>/modmeta.info`,
/// and on success writes `<mods_root>/<mod_id>.mod`, returning its path. The
/// output is written to a temporary file in `mods_root` and renamed into
/// place, so no partial or stale-truncated file is ever visible: if either
/// input is missing or malformed, the target path is left untouched.
pub fn convert(mods_root: &Path, mod_id: i32) -> Result<PathBuf> {
    let mod_dir = mods_root.join(mod_id.to_string());

    let info_data = read_input(&mod_dir.join("mod.info"))?;
    let info = ModInfo::parse(&info_data)?;

    let meta_data = read_input(&mod_dir.join("modmeta.info"))?;
    let meta = ModMeta::parse(&meta_data)?;

    let descriptor = ModDescriptor {
        mod_id,
        map_names: info.map_names,
        meta: meta.entries,
    };

    let output_path = mods_root.join(format!("{mod_id}.mod"));
    let data = descriptor.write();

    // Temp file in the same directory so the rename stays on one filesystem.
    let mut tmp = NamedTempFile::new_in(mods_root)?;
    tmp.write_all(&data)?;
    tmp.persist(&output_path).map_err(|e| Error::Io(e.error))?;

    info!(
        "wrote {} ({} bytes, {} map(s), {} metadata pair(s))",
        output_path.display(),
        data.len(),
        descriptor.map_names.len(),
        descriptor.meta.len()
    );
    Ok(output_path)
}

/// Read an input file fully, mapping a missing file to [`Error::MissingFile`].
fn read_input(path: &Path) -> Result<Vec<u8>> {
    debug!("reading {}", path.display());
    match fs::read(path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::MissingFile(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}
