/// Cell layout used to linearize one bitmap sheet.
///
/// A sheet is flattened cell by cell so that each frame or tile lands
/// contiguously in the output stream. Cell dimensions must be positive;
/// `linearize` rejects zero dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub cell_width: u32,
    pub cell_height: u32,
    /// Replace pixels matching each cell's top-left pixel with the
    /// transparency sentinel.
    pub transparent_from_top_left: bool,
}

impl SheetLayout {
    pub const fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width,
            cell_height,
            transparent_from_top_left: false,
        }
    }
}

/// Known sheets and their fixed cell sizes.
///
/// These layouts keep the expected frame/tile contiguous order when the
/// converted data is loaded into sprite or tile memory.
pub const KNOWN_SHEETS: &[(&str, SheetLayout)] = &[
    ("spritemap.bmp", SheetLayout::new(32, 32)),
    ("dinorunsheet.bmp", SheetLayout::new(32, 32)),
    ("sunsheet.bmp", SheetLayout::new(32, 32)),
    ("tilemap.bmp", SheetLayout::new(8, 8)),
];

/// Pick the conversion layout for a sheet by file name.
///
/// Unknown names fall back to 1x1 cells, i.e. plain row-major order over
/// the whole image. `force_transparent` turns on top-left transparency
/// keying regardless of the table default.
pub fn layout_for(name: &str, force_transparent: bool) -> SheetLayout {
    let mut layout = KNOWN_SHEETS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, layout)| layout)
        .unwrap_or(SheetLayout::new(1, 1));
    if force_transparent {
        layout.transparent_from_top_left = true;
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sheets_use_table_entries() {
        let l = layout_for("spritemap.bmp", false);
        assert_eq!((l.cell_width, l.cell_height), (32, 32));
        assert!(!l.transparent_from_top_left);

        let l = layout_for("tilemap.bmp", false);
        assert_eq!((l.cell_width, l.cell_height), (8, 8));
    }

    #[test]
    fn unknown_sheets_default_to_single_pixel_cells() {
        let l = layout_for("title.bmp", false);
        assert_eq!((l.cell_width, l.cell_height), (1, 1));
        assert!(!l.transparent_from_top_left);
    }

    #[test]
    fn force_transparent_overrides_table_default() {
        let l = layout_for("spritemap.bmp", true);
        assert_eq!((l.cell_width, l.cell_height), (32, 32));
        assert!(l.transparent_from_top_left);

        let l = layout_for("unknown.bmp", true);
        assert_eq!((l.cell_width, l.cell_height), (1, 1));
        assert!(l.transparent_from_top_left);
    }
}
