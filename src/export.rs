//! Grayscale PNG export of the generated heightfield.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::terrain::TerrainGrid;

/// Render grid heights to an 8-bit grayscale image
///
/// Pixel `(x, y)` is vertex `(i = y, j = x)`. Heights are normalised between
/// the grid's min and max; a flat grid maps to mid-gray.
pub fn heightmap_image(grid: &TerrainGrid) -> GrayImage {
    let size = grid.map_size() as u32;
    let (min, max) = grid.height_range();
    let span = max - min;

    let mut img = GrayImage::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let height = grid.height(y as usize, x as usize);
            let gray = if span > 0.0 {
                ((height - min) / span * 255.0).round().clamp(0.0, 255.0) as u8
            } else {
                128
            };
            img.put_pixel(x, y, Luma([gray]));
        }
    }
    img
}

/// Write the heightmap of `grid` to a PNG file
pub fn save_heightmap(grid: &TerrainGrid, path: &Path) -> image::ImageResult<()> {
    heightmap_image(grid).save(path)?;
    log::info!(
        "Wrote {}x{} heightmap to {}",
        grid.map_size(),
        grid.map_size(),
        path.display()
    );
    Ok(())
}
