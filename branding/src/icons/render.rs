use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    imageops::{self, FilterType},
    DynamicImage, ExtendedColorType, ImageError, ImageFormat, Rgba, RgbaImage,
};
use std::io::Cursor;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const WHITE_TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Fits the image into a `size`×`size` box keeping its aspect ratio, centered on `background`.
pub fn contain(source: &DynamicImage, size: u32, background: Rgba<u8>) -> RgbaImage {
    let resized = source.resize(size, size, FilterType::Lanczos3).to_rgba8();
    let mut canvas = RgbaImage::from_pixel(size, size, background);
    let x = (size - resized.width()) / 2;
    let y = (size - resized.height()) / 2;
    imageops::overlay(&mut canvas, &resized, i64::from(x), i64::from(y));

    canvas
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;

    Ok(buffer.into_inner())
}

/// Multi-resolution ICO with one PNG-compressed frame per size.
pub fn encode_ico(source: &DynamicImage, sizes: &[u32]) -> Result<Vec<u8>, ImageError> {
    let frames = sizes
        .iter()
        .map(|&size| {
            let image = contain(source, size, TRANSPARENT);
            IcoFrame::as_png(image.as_raw(), size, size, ExtendedColorType::Rgba8)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut buffer = Vec::new();
    IcoEncoder::new(&mut buffer).encode_images(&frames)?;

    Ok(buffer)
}

/// Wraps a PNG into an SVG document whose viewport matches the raster size.
pub fn svg_document(png: &[u8], width: u32, height: u32) -> String {
    let encoded = STANDARD.encode(png);

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink"
     width="{width}" height="{height}" viewBox="0 0 {width} {height}">
  <image width="{width}" height="{height}" xlink:href="data:image/png;base64,{encoded}"/>
</svg>"#
    )
}
