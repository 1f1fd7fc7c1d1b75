//! Local export of screenshot chunks.
//!
//! The hosted original converted images in the browser via a canvas and
//! triggered one download per chunk, spacing them out to keep the browser's
//! download mechanism happy. Writing files directly needs no such spacing,
//! so the batch variant is a plain sequential loop.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::Engine;
use image::{DynamicImage, ImageOutputFormat};

use crate::api::models::FullPageScreenshot;
use crate::error::{AppError, Result};

const JPEG_QUALITY: u8 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Lossless PNG.
    Png,
    /// JPEG at quality 95.
    Jpg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
        }
    }
}

/// Strips the `data:<mime>;base64,` header and decodes the payload.
pub fn decode_data_uri(data: &str) -> Result<Vec<u8>> {
    let payload = data
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(','))
        .map(|(_, payload)| payload)
        .ok_or_else(|| AppError::Decode("not a data URI".to_string()))?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| AppError::Decode(format!("invalid base64 payload: {}", e)))
}

/// Decodes an inline image payload, re-encodes it in the requested format,
/// and writes it to `path`. The file is only written once the whole
/// conversion has succeeded; a decode failure leaves no partial file.
pub fn export_chunk(image_data: &str, path: &Path, format: ExportFormat) -> Result<()> {
    let bytes = decode_data_uri(image_data)?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| AppError::Decode(e.to_string()))?;

    let mut out = Cursor::new(Vec::new());
    match format {
        ExportFormat::Png => img
            .write_to(&mut out, ImageOutputFormat::Png)
            .map_err(|e| AppError::Decode(e.to_string()))?,
        // JPEG has no alpha channel; flatten first, as the canvas did.
        ExportFormat::Jpg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_to(&mut out, ImageOutputFormat::Jpeg(JPEG_QUALITY))
            .map_err(|e| AppError::Decode(e.to_string()))?,
    }

    fs::write(path, out.into_inner())?;
    Ok(())
}

/// Exports every chunk of a screenshot into `dir`, named
/// `{profile}-chunk-{number}.{ext}`. Returns the written paths in order.
pub fn export_screenshot(
    screenshot: &FullPageScreenshot,
    dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(screenshot.chunks.len());
    for chunk in &screenshot.chunks {
        let filename = format!(
            "{}-chunk-{}.{}",
            screenshot.profile,
            chunk.chunk_number,
            format.extension()
        );
        let path = dir.join(filename);
        export_chunk(&chunk.image_data, &path, format)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Chunk;
    use crate::provider::to_data_uri;
    use image::RgbaImage;

    fn sample_data_uri() -> String {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([120, 40, 200, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageOutputFormat::Png)
            .unwrap();
        to_data_uri(&buf.into_inner())
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pagesnap-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn exports_png_and_jpg_from_data_uri() {
        let dir = scratch_dir("roundtrip");
        let uri = sample_data_uri();

        for format in [ExportFormat::Png, ExportFormat::Jpg] {
            let path = dir.join(format!("chunk.{}", format.extension()));
            export_chunk(&uri, &path, format).unwrap();

            let reloaded = image::open(&path).unwrap();
            assert_eq!(reloaded.width(), 4);
            assert_eq!(reloaded.height(), 4);
        }
    }

    #[test]
    fn bad_payload_writes_no_file() {
        let dir = scratch_dir("badpayload");
        let path = dir.join("never.png");

        let err = export_chunk("data:image/png;base64,AAAA", &path, ExportFormat::Png);
        assert!(matches!(err, Err(AppError::Decode(_))));
        assert!(!path.exists());

        let err = export_chunk("plainly not an image", &path, ExportFormat::Png);
        assert!(matches!(err, Err(AppError::Decode(_))));
        assert!(!path.exists());
    }

    #[test]
    fn batch_export_names_files_by_profile_and_number() {
        let dir = scratch_dir("batch");
        let uri = sample_data_uri();
        let screenshot = FullPageScreenshot {
            profile: "mobile".to_string(),
            total_height: 8192,
            chunks: vec![
                Chunk { chunk_number: 1, height: 4096, image_data: uri.clone() },
                Chunk { chunk_number: 2, height: 4096, image_data: uri },
            ],
        };

        let written = export_screenshot(&screenshot, &dir, ExportFormat::Png).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("mobile-chunk-1.png"));
        assert!(written[1].ends_with("mobile-chunk-2.png"));
        assert!(written.iter().all(|p| p.exists()));
    }
}
