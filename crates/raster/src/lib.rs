use image::{ImageBuffer, Rgba, RgbaImage};
use thiserror::Error;
use tracing::debug;
use types::IconTheme;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("icon size must be positive")]
    ZeroSize,
    #[error("theme divisor `{0}` must be positive")]
    ZeroDivisor(&'static str),
}

/// Placement of the border outline for one icon size.
///
/// The rectangle is inclusive on both corners and the stroke grows inward
/// from its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGeometry {
    pub size: u32,
    pub padding: u32,
    pub border_width: u32,
}

impl BorderGeometry {
    pub fn for_size(size: u32, theme: &IconTheme) -> Result<Self, RasterError> {
        if size == 0 {
            return Err(RasterError::ZeroSize);
        }
        if theme.padding_divisor == 0 {
            return Err(RasterError::ZeroDivisor("padding_divisor"));
        }
        if theme.border_divisor == 0 {
            return Err(RasterError::ZeroDivisor("border_divisor"));
        }
        Ok(Self {
            size,
            padding: size / theme.padding_divisor,
            border_width: theme.min_border_width.max(size / theme.border_divisor),
        })
    }

    pub fn top_left(&self) -> (u32, u32) {
        (self.padding, self.padding)
    }

    /// May lie one pixel past the image edge when padding is zero.
    pub fn bottom_right(&self) -> (u32, u32) {
        let far = self.size - self.padding;
        (far, far)
    }
}

/// True when `(x, y)` is covered by the stroked outline.
pub fn is_border_pixel(geometry: &BorderGeometry, x: u32, y: u32) -> bool {
    let (x0, y0) = geometry.top_left();
    let (x1, y1) = geometry.bottom_right();
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    // a stroke wider than the rectangle covers all of it
    let w = geometry.border_width;
    x < x0.saturating_add(w)
        || x.saturating_add(w) > x1
        || y < y0.saturating_add(w)
        || y.saturating_add(w) > y1
}

/// Stroke the outline described by `geometry` onto `img`, clipped to its bounds.
pub fn stroke_rect(img: &mut RgbaImage, geometry: &BorderGeometry, color: Rgba<u8>) {
    let (x0, y0) = geometry.top_left();
    let (x1, y1) = geometry.bottom_right();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    for y in y0..=y1.min(height - 1) {
        for x in x0..=x1.min(width - 1) {
            if is_border_pixel(geometry, x, y) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Square bitmap filled with the theme background and outlined with the theme border.
pub fn render_icon(size: u32, theme: &IconTheme) -> Result<RgbaImage, RasterError> {
    let geometry = BorderGeometry::for_size(size, theme)?;
    debug!(
        size,
        padding = geometry.padding,
        border_width = geometry.border_width,
        "rendering icon"
    );
    let mut img: RgbaImage = ImageBuffer::from_pixel(size, size, Rgba(theme.background));
    stroke_rect(&mut img, &geometry, Rgba(theme.border));
    Ok(img)
}
