use std::io::Cursor;

use image::{DynamicImage, GrayImage, Luma};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

/// pixels per QR module
const MODULE_SCALE: u32 = 8;
/// quiet zone around the symbol, in modules
const QUIET_ZONE: u32 = 4;

#[derive(Debug, thiserror::Error)]
pub enum QrEncodeError {
    #[error("qr encode error: {0}")]
    Encode(#[from] QrError),

    #[error("png encode error: {0}")]
    Png(#[from] image::ImageError),
}

/// Encode `data` as a QR code and return it as PNG bytes.
///
/// Uses error-correction level Q and the smallest symbol version that fits
/// the input. Deterministic for a given input.
pub fn encode_png(data: &str) -> Result<Vec<u8>, QrEncodeError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::Q)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let img_size = (module_count + 2 * QUIET_ZONE) * MODULE_SCALE;
    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32 % module_count + QUIET_ZONE) * MODULE_SCALE;
        let y = (i as u32 / module_count + QUIET_ZONE) * MODULE_SCALE;
        for dx in 0..MODULE_SCALE {
            for dy in 0..MODULE_SCALE {
                img.put_pixel(x + dx, y + dy, Luma([0u8]));
            }
        }
    }

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(img).write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(png)
}
