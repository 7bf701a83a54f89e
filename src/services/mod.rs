pub mod image_decoder;
pub mod page_fetcher;

pub use image_decoder::{DecodedImage, ImageDecoder};
pub use page_fetcher::{extract_hex_colors, PageFetcher};
