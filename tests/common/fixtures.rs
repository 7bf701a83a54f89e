//! Test fixtures and constants.

/// Colors with well-known contrast behavior on white
pub mod colors {
    /// 4.48:1 on white, fails AA
    pub const MID_GRAY: &str = "#777777";

    /// First darkening of MID_GRAY reaching 7:1 on white
    pub const MID_GRAY_FIXED: &str = "#595959";

    /// 3.11:1 on white
    pub const DODGER_BLUE: &str = "#1E90FF";

    /// First darkening of DODGER_BLUE reaching 7:1 on white
    pub const DODGER_BLUE_FIXED: &str = "#004FBE";

    pub const RED: &str = "#FF0000";
    pub const BLACK: &str = "#000000";
    pub const WHITE: &str = "#FFFFFF";
}

/// Encode an 8-bit RGB PNG from row-major pixels
pub fn rgb_png(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    encode(width, height, png::ColorType::Rgb, &data)
}

/// Encode an 8-bit RGBA PNG from row-major pixels
pub fn rgba_png(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    encode(width, height, png::ColorType::Rgba, &data)
}

/// A PNG split into a left and a right half of two colors
pub fn split_png(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let pixels: Vec<[u8; 3]> = (0..height)
        .flat_map(|_| (0..width).map(move |x| if x < width / 2 { left } else { right }))
        .collect();
    rgb_png(width, height, &pixels)
}

/// A PNG header declaring a `width` x `height` canvas with a token data
/// chunk. Far smaller than the canvas it claims.
pub fn declared_canvas_png(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer
            .write_chunk(png::chunk::IDAT, &[0x78, 0x01])
            .expect("PNG chunk");
    }
    buf
}

fn encode(width: u32, height: u32, color_type: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf
}

/// A small page using colors in every place the extractor looks
pub const SAMPLE_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <style>
    body { color: #333; background: #FFFFFF; }
    a { color: #1e90ff; }
  </style>
</head>
<body>
  <p style="color: #777777">Muted text</p>
  <font color="#ff0000">Legacy markup</font>
  <a href="/">Link</a>
</body>
</html>
"##;
