use crate::error::Result;
use crate::ssao::NOISE_TILE_SIZE;
use crate::ssao::settings::SsaoTables;
use image::RgbaImage;
use log::info;
use std::path::Path;

/// Saves the SSAO noise tile as a 4x4 RGBA PNG.
pub fn save_noise_tile<P: AsRef<Path>>(tables: &SsaoTables, path: P) -> Result<()> {
    let size = NOISE_TILE_SIZE as u32;
    let mut img_buf = RgbaImage::new(size, size);

    let data = tables.noise_rgba8();
    for (x, y, pixel) in img_buf.enumerate_pixels_mut() {
        let idx = ((y * size + x) * 4) as usize;
        *pixel = image::Rgba([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
    }

    img_buf.save(path.as_ref())?;
    info!("Saved SSAO noise tile to {:?}", path.as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssao::settings::SsaoSettings;

    #[test]
    fn test_noise_tile_png_round_trip() {
        let tables = SsaoSettings::default().build_tables().unwrap();
        let path = std::env::temp_dir().join(format!("hdr_grading_noise_{}.png", std::process::id()));

        save_noise_tile(&tables, &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.into_raw(), tables.noise_rgba8());
    }
}
