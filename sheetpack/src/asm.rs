//! Assembler source rendering for packed sheet data.

use std::path::Path;

use crate::layout::SheetLayout;

/// Derive a stable assembler symbol from an asset file name.
///
/// The file stem is reduced to `[A-Za-z0-9_]` (everything else becomes an
/// underscore) and uppercased; an empty stem becomes `ASSET`, a leading
/// digit gets an underscore prefix, and `_DATA` is appended.
pub fn symbol_name(source_name: &str) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut symbol: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if symbol.is_empty() {
        symbol.push_str("ASSET");
    }
    if symbol.as_bytes()[0].is_ascii_digit() {
        symbol.insert(0, '_');
    }
    symbol.push_str("_DATA");
    symbol
}

/// Render the assembler source text for one converted sheet.
///
/// The artifact is line-oriented ASCII: a header comment block, the
/// `.align 4` / `.data` / `.global` directives indented two spaces, the
/// unindented symbol label, and one `.fill` line per 32-bit word with the
/// value as `0x` plus eight uppercase hex digits. The text ends with a
/// trailing newline.
pub fn render(
    source_name: &str,
    layout: &SheetLayout,
    words: &[u32],
    image_width: u32,
    image_height: u32,
) -> String {
    let symbol = symbol_name(source_name);
    let cells_x = image_width / layout.cell_width;
    let cells_y = image_height / layout.cell_height;
    let pixel_count = image_width as u64 * image_height as u64;

    let mut lines: Vec<String> = Vec::with_capacity(words.len() + 10);
    lines.push(format!("# Auto-generated from {source_name} by sheetpack"));
    lines.push("# Pixel format: legacy 16-bit 0x0BGR (low nibble = red, top nibble = 0)".into());
    lines.push("# Packing: two 16-bit pixels per .fill word (low half = first pixel)".into());
    lines.push(format!(
        "# Sheet: {}x{} px, cell {}x{} px, {}x{} cells, {} pixels, {} .fill words",
        image_width,
        image_height,
        layout.cell_width,
        layout.cell_height,
        cells_x,
        cells_y,
        pixel_count,
        words.len()
    ));
    lines.push(String::new());
    lines.push("  .align 4".into());
    lines.push("  .data".into());
    lines.push(format!("  .global {symbol}"));
    lines.push(format!("{symbol}:"));
    for word in words {
        lines.push(format!("  .fill 0x{word:08X}"));
    }
    lines.push(String::new());

    lines.join("\n")
}
