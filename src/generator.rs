use anyhow::{Context, Result};
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::constants::output::{FILE_EXTENSION, FILE_PREFIX};
use crate::icon;

/// File name for an icon of the given size, e.g. `icon48.png`
pub fn icon_file_name(size: u32) -> String {
    format!("{}{}.{}", FILE_PREFIX, size, FILE_EXTENSION)
}

/// Render every configured size and write it to the output directory
///
/// Existing files are overwritten. The first I/O or encoding failure aborts
/// the run; files already written are left in place. Returns the written
/// paths in configuration order.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let output_dir = &config.output_dir;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create icons directory {}", output_dir.display()))?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        println!("Generating {}x{} icon...", size, size);
        let path = output_dir.join(icon_file_name(size));
        write_icon(size, &path)?;
        written.push(path);
    }

    log::info!("Wrote {} icons to {}", written.len(), output_dir.display());
    Ok(written)
}

fn write_icon(size: u32, path: &Path) -> Result<()> {
    let img = icon::render(size);
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Saved {}x{} icon to {}", size, size, path.display());
    Ok(())
}
