use crate::color;
use crate::error::ConvertError;
use crate::image::ImageRgb8;
use crate::layout::SheetLayout;

/// Flatten a bitmap sheet into a contiguous stream of encoded 16-bit pixels.
///
/// Traversal order:
/// 1. Cell rows, top to bottom
/// 2. Cell columns within the row, left to right
/// 3. Pixel rows within the cell, top to bottom
/// 4. Pixels within the pixel row, left to right
///
/// so every cell's pixels are emitted completely before the next cell,
/// the order sprite and tile memory expects when frames load contiguously.
///
/// When `transparent_from_top_left` is set, the raw (R, G, B) at each
/// cell's top-left keys that cell's transparency: any pixel in the cell
/// matching it (the key pixel included) is emitted as the sentinel instead
/// of its encoding. The comparison uses raw channels, not encoded values,
/// so distinct colors that truncate alike never collide.
pub fn linearize(image: &ImageRgb8, layout: &SheetLayout) -> Result<Vec<u16>, ConvertError> {
    if layout.cell_width == 0 || layout.cell_height == 0 {
        return Err(ConvertError::InvalidLayout(
            layout.cell_width,
            layout.cell_height,
        ));
    }
    if image.width % layout.cell_width != 0 || image.height % layout.cell_height != 0 {
        return Err(ConvertError::SizeMismatch {
            width: image.width,
            height: image.height,
            cell_width: layout.cell_width,
            cell_height: layout.cell_height,
        });
    }

    let cols = image.width / layout.cell_width;
    let rows = image.height / layout.cell_height;
    let mut pixels = Vec::with_capacity(image.width as usize * image.height as usize);

    for cell_row in 0..rows {
        for cell_col in 0..cols {
            let x0 = cell_col * layout.cell_width;
            let y0 = cell_row * layout.cell_height;
            let key = image.get(x0, y0);

            for y in 0..layout.cell_height {
                for x in 0..layout.cell_width {
                    let (r, g, b) = image.get(x0 + x, y0 + y);
                    if layout.transparent_from_top_left && (r, g, b) == key {
                        pixels.push(color::TRANSPARENT);
                    } else {
                        pixels.push(color::encode(r, g, b));
                    }
                }
            }
        }
    }

    Ok(pixels)
}
