pub mod image_helper {
    use crate::core_modules::cell::CellLabel;
    use crate::core_modules::error::{BlobError, Result};
    use crate::core_modules::grid_loader::Grid;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::path::Path;

    const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const UNDISCOVERED: Rgba<u8> = Rgba([255, 255, 255, 255]);

    const PALETTE: [[u8; 3]; 8] = [
        [230, 25, 75],
        [60, 180, 75],
        [255, 225, 25],
        [0, 130, 200],
        [245, 130, 48],
        [145, 30, 180],
        [70, 240, 240],
        [240, 50, 230],
    ];

    /// Color assigned to a blob ID. Cycles through the palette.
    pub fn blob_color(id: u32) -> Rgba<u8> {
        let [r, g, b] = PALETTE[(id.saturating_sub(1) as usize) % PALETTE.len()];
        Rgba([r, g, b, 255])
    }

    /// Image `(width, height)` for a grid, or an error if either side exceeds `u32`.
    pub fn image_dimensions(rows: usize, columns: usize) -> Result<(u32, u32)> {
        match (u32::try_from(columns), u32::try_from(rows)) {
            (Ok(width), Ok(height)) => Ok((width, height)),
            _ => Err(BlobError::ImageTooLarge { rows, columns }),
        }
    }

    /// Renders the grid as one pixel per cell: x is the column, y is the row.
    pub fn label_map(grid: &Grid) -> Result<RgbaImage> {
        let (width, height) = image_dimensions(grid.rows(), grid.columns())?;
        let mut image = RgbaImage::new(width, height);
        for cell in grid.cells() {
            let color = match cell.label {
                CellLabel::Background => BACKGROUND,
                CellLabel::Undiscovered => UNDISCOVERED,
                CellLabel::Blob(id) => blob_color(id),
            };
            let (x, y) = image_dimensions(cell.position.row, cell.position.column)?;
            image.put_pixel(x, y, color);
        }
        Ok(image)
    }

    /// Writes the label map of `grid` to `path` as a PNG.
    pub fn save_label_map(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
        let path = path.as_ref();
        label_map(grid)?.save_with_format(path, ImageFormat::Png)?;
        log::info!("Label map written to {}", path.display());
        Ok(())
    }
}
