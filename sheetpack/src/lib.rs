pub mod asm;
pub mod color;
pub mod error;
pub mod image;
pub mod layout;
pub mod linearize;
pub mod pack;

use crate::error::ConvertError;
use crate::image::ImageRgb8;
use crate::layout::SheetLayout;

/// Convert one decoded bitmap into assembler source text.
///
/// Runs the full pipeline: linearize into encoded 16-bit pixels, pack
/// into 32-bit `.fill` words, render the `.s` text. Validation failures
/// surface before any output text exists, so an `Err` never leaves a
/// partial artifact behind.
pub fn convert(
    image: &ImageRgb8,
    source_name: &str,
    layout: &SheetLayout,
) -> Result<String, ConvertError> {
    let pixels = linearize::linearize(image, layout)?;
    let words = pack::pack(&pixels);
    Ok(asm::render(
        source_name,
        layout,
        &words,
        image.width,
        image.height,
    ))
}
