use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use types::{IconSet, IconSpec};

/// A file written by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
}

/// Render one icon and write it into the set's output directory.
pub fn create_icon(set: &IconSet, icon: &IconSpec) -> Result<GeneratedIcon> {
    let img = raster::render_icon(icon.size, &set.theme)
        .with_context(|| format!("rendering {}", icon.filename))?;
    let path = set.path_for(icon);
    io::write_png(&img, &path)?;
    info!(path = %path.display(), size = icon.size, "icon written");
    println!("Created {}", path.display());
    Ok(GeneratedIcon { path, size: icon.size })
}

/// Create the output directory, then every icon in order. Stops at the first failure;
/// icons written before it stay on disk.
pub fn run(set: &IconSet) -> Result<Vec<GeneratedIcon>> {
    io::ensure_output_directory(&set.output_dir)?;
    let mut written = Vec::with_capacity(set.icons.len());
    for icon in &set.icons {
        written.push(create_icon(set, icon)?);
    }
    println!("All icons created successfully!");
    Ok(written)
}
