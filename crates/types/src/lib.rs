use std::path::{Path, PathBuf};

/// Directory holding the desktop app sources, relative to the working directory.
pub const APP_SOURCE_DIR: &str = "src-tauri";
/// Icons directory nested under [`APP_SOURCE_DIR`].
pub const ICONS_DIR: &str = "icons";

pub type Rgba8 = [u8; 4];

/// One square icon to produce: pixel size and target file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: String,
}

impl IconSpec {
    pub fn new(size: u32, filename: impl Into<String>) -> Self {
        Self { size, filename: filename.into() }
    }

    /// The packaged icon set, in generation order.
    ///
    /// `128x128@2x.png` is the 256px density variant of `128x128.png`.
    pub fn defaults() -> Vec<IconSpec> {
        vec![
            IconSpec::new(32, "32x32.png"),
            IconSpec::new(128, "128x128.png"),
            IconSpec::new(256, "128x128@2x.png"),
            IconSpec::new(512, "icon.png"),
        ]
    }
}

/// Colors and ratios of the placeholder design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTheme {
    pub background: Rgba8,
    pub border: Rgba8,
    /// padding = size / padding_divisor
    pub padding_divisor: u32,
    /// border width = max(min_border_width, size / border_divisor)
    pub border_divisor: u32,
    pub min_border_width: u32,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            background: [102, 126, 234, 255],
            border: [255, 255, 255, 255],
            padding_divisor: 8,
            border_divisor: 64,
            min_border_width: 2,
        }
    }
}

/// Everything a generation run needs: where to write, what to draw, which sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub output_dir: PathBuf,
    pub theme: IconTheme,
    pub icons: Vec<IconSpec>,
}

impl IconSet {
    /// Same icons and theme, with the output directory resolved under `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        Self {
            output_dir: root.as_ref().join(default_output_dir()),
            ..Self::default()
        }
    }

    pub fn path_for(&self, icon: &IconSpec) -> PathBuf {
        self.output_dir.join(&icon.filename)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            theme: IconTheme::default(),
            icons: IconSpec::defaults(),
        }
    }
}

/// `src-tauri/icons`, relative to the working directory.
pub fn default_output_dir() -> PathBuf {
    Path::new(APP_SOURCE_DIR).join(ICONS_DIR)
}
