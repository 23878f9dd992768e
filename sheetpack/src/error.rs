use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cell size {0}x{1} is not positive")]
    InvalidLayout(u32, u32),

    #[error(
        "image size {width}x{height} is not divisible by cell size {cell_width}x{cell_height}"
    )]
    SizeMismatch {
        width: u32,
        height: u32,
        cell_width: u32,
        cell_height: u32,
    },
}
