//! PNG decoding and downsampling for dominant-color analysis.
//!
//! Decoded images are resampled with nearest-neighbour sampling to a fixed
//! square analysis grid. Aspect ratio is not preserved; averaging filters
//! are avoided because they would invent colors that do not exist in the
//! source image.

use color_engine::{PixelGrid, Rgb};

use crate::error::DecodeError;

/// A decoded image at its original resolution.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

/// Decodes uploads and prepares them for the dominant-color extractor
#[derive(Debug, Clone)]
pub struct ImageDecoder {
    max_bytes: usize,
    max_pixels: u64,
    analysis_size: u32,
}

/// Largest canvas decoded by default, in pixels
pub const DEFAULT_MAX_PIXELS: u64 = 25_000_000;

impl ImageDecoder {
    pub fn new(max_bytes: usize, analysis_size: u32) -> Self {
        Self {
            max_bytes,
            max_pixels: DEFAULT_MAX_PIXELS,
            analysis_size: analysis_size.max(1),
        }
    }

    /// Limit the declared canvas size. Checked against the PNG header
    /// before any pixel buffer is allocated.
    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    /// Decode PNG bytes into RGB samples, dropping alpha.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }
        if bytes.len() > self.max_bytes {
            return Err(DecodeError::TooLarge {
                size: bytes.len(),
                max: self.max_bytes,
            });
        }

        let mut decoder = png::Decoder::new(bytes);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .map_err(|e| DecodeError::Png(e.to_string()))?;

        let (width, height) = {
            let info = reader.info();
            (info.width, info.height)
        };
        if u64::from(width) * u64::from(height) > self.max_pixels {
            return Err(DecodeError::Dimensions {
                width,
                height,
                max_pixels: self.max_pixels,
            });
        }

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader
            .next_frame(&mut buf)
            .map_err(|e| DecodeError::Png(e.to_string()))?;
        let data = &buf[..frame.buffer_size()];

        if frame.bit_depth != png::BitDepth::Eight {
            return Err(DecodeError::UnsupportedFormat(format!(
                "bit depth {:?}",
                frame.bit_depth
            )));
        }

        let pixels: Vec<Rgb> = match frame.color_type {
            png::ColorType::Rgb => data
                .chunks_exact(3)
                .map(|px| Rgb::new(px[0], px[1], px[2]))
                .collect(),
            png::ColorType::Rgba => data
                .chunks_exact(4)
                .map(|px| Rgb::new(px[0], px[1], px[2]))
                .collect(),
            png::ColorType::Grayscale => data.iter().map(|&v| Rgb::new(v, v, v)).collect(),
            png::ColorType::GrayscaleAlpha => data
                .chunks_exact(2)
                .map(|px| Rgb::new(px[0], px[0], px[0]))
                .collect(),
            png::ColorType::Indexed => {
                return Err(DecodeError::UnsupportedFormat(
                    "indexed color was not expanded".to_string(),
                ))
            }
        };

        tracing::debug!(
            width = frame.width,
            height = frame.height,
            color_type = ?frame.color_type,
            "Decoded PNG"
        );

        Ok(DecodedImage {
            width: frame.width,
            height: frame.height,
            pixels,
        })
    }

    /// Decode and resample to the analysis grid in one step.
    pub fn decode_for_analysis(&self, bytes: &[u8]) -> Result<(DecodedImage, PixelGrid), DecodeError> {
        let image = self.decode(bytes)?;
        let grid = downsample(&image, self.analysis_size)?;
        Ok((image, grid))
    }

    pub fn analysis_size(&self) -> u32 {
        self.analysis_size
    }
}

/// Nearest-neighbour resample to `size` x `size`.
pub fn downsample(image: &DecodedImage, size: u32) -> Result<PixelGrid, DecodeError> {
    let (width, height) = (image.width as usize, image.height as usize);
    if width == 0 || height == 0 || image.pixels.len() != width * height {
        return Err(DecodeError::Png(format!(
            "{}x{} image has {} pixels",
            width,
            height,
            image.pixels.len()
        )));
    }

    let size = size as usize;
    let pixels: Vec<Rgb> = (0..size)
        .flat_map(|y| {
            let sy = y * height / size;
            (0..size).map(move |x| (x * width / size, sy))
        })
        .map(|(sx, sy)| image.pixels[sy * width + sx])
        .collect();

    PixelGrid::new(size, size, pixels).map_err(|e| DecodeError::Png(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(width: u32, height: u32, color_type: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color_type);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf.into_inner()
    }

    fn decoder() -> ImageDecoder {
        ImageDecoder::new(1024 * 1024, 100)
    }

    #[test]
    fn test_decode_rgb() {
        let bytes = encode(2, 1, png::ColorType::Rgb, &[255, 0, 0, 0, 0, 255]);
        let image = decoder().decode(&bytes).unwrap();
        assert_eq!((image.width, image.height), (2, 1));
        assert_eq!(image.pixels, vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);
    }

    #[test]
    fn test_decode_rgba_drops_alpha() {
        let bytes = encode(1, 1, png::ColorType::Rgba, &[10, 20, 30, 0]);
        let image = decoder().decode(&bytes).unwrap();
        assert_eq!(image.pixels, vec![Rgb::new(10, 20, 30)]);
    }

    #[test]
    fn test_decode_grayscale() {
        let bytes = encode(2, 1, png::ColorType::Grayscale, &[0, 200]);
        let image = decoder().decode(&bytes).unwrap();
        assert_eq!(image.pixels, vec![Rgb::BLACK, Rgb::new(200, 200, 200)]);
    }

    #[test]
    fn test_decode_grayscale_alpha() {
        let bytes = encode(1, 1, png::ColorType::GrayscaleAlpha, &[77, 255]);
        let image = decoder().decode(&bytes).unwrap();
        assert_eq!(image.pixels, vec![Rgb::new(77, 77, 77)]);
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(matches!(decoder().decode(&[]), Err(DecodeError::Empty)));

        let small = ImageDecoder::new(8, 100);
        let bytes = encode(1, 1, png::ColorType::Rgb, &[0, 0, 0]);
        assert!(matches!(
            small.decode(&bytes),
            Err(DecodeError::TooLarge { max: 8, .. })
        ));
    }

    /// Header for a huge canvas followed by a token IDAT chunk; the
    /// decoder must refuse it from the header alone.
    fn huge_canvas(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_chunk(png::chunk::IDAT, &[0x78, 0x01]).unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn test_rejects_huge_canvas_from_header() {
        let bytes = huge_canvas(12_000, 12_000);
        assert!(bytes.len() < 1024);

        let result = ImageDecoder::new(10 * 1024 * 1024, 100).decode_for_analysis(&bytes);
        assert!(matches!(
            result,
            Err(DecodeError::Dimensions {
                width: 12_000,
                height: 12_000,
                max_pixels: DEFAULT_MAX_PIXELS,
            })
        ));
    }

    #[test]
    fn test_max_pixels_is_configurable() {
        let bytes = encode(20, 10, png::ColorType::Grayscale, &[0u8; 200]);

        let strict = decoder().with_max_pixels(199);
        assert!(matches!(
            strict.decode(&bytes),
            Err(DecodeError::Dimensions { max_pixels: 199, .. })
        ));

        let exact = decoder().with_max_pixels(200);
        assert_eq!(exact.decode(&bytes).unwrap().pixels.len(), 200);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            decoder().decode(b"definitely not a png"),
            Err(DecodeError::Png(_))
        ));
    }

    #[test]
    fn test_downsample_preserves_proportions() {
        // Left half red, right half blue
        let mut pixels = Vec::new();
        for _ in 0..4 {
            pixels.extend([Rgb::new(255, 0, 0); 2]);
            pixels.extend([Rgb::new(0, 0, 255); 2]);
        }
        let image = DecodedImage {
            width: 4,
            height: 4,
            pixels,
        };

        let grid = downsample(&image, 10).unwrap();
        assert_eq!((grid.width(), grid.height()), (10, 10));
        let red = grid
            .pixels()
            .iter()
            .filter(|&&p| p == Rgb::new(255, 0, 0))
            .count();
        assert_eq!(red, 50);
    }

    #[test]
    fn test_downsample_upscales_small_images() {
        let image = DecodedImage {
            width: 1,
            height: 1,
            pixels: vec![Rgb::WHITE],
        };
        let grid = downsample(&image, 3).unwrap();
        assert_eq!(grid.pixels(), &[Rgb::WHITE; 9]);
    }

    #[test]
    fn test_downsample_rejects_truncated_buffer() {
        let image = DecodedImage {
            width: 2,
            height: 2,
            pixels: vec![Rgb::WHITE; 3],
        };
        assert!(matches!(downsample(&image, 4), Err(DecodeError::Png(_))));
    }

    #[test]
    fn test_decode_for_analysis_uses_configured_size() {
        let bytes = encode(3, 2, png::ColorType::Rgb, &[0u8; 18]);
        let (image, grid) = ImageDecoder::new(1024, 16).decode_for_analysis(&bytes).unwrap();
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!((grid.width(), grid.height()), (16, 16));
    }
}
