// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Flattening of the base image and the ink raster into one PNG.
//!
//! The base image is stretched to fill the canvas exactly (aspect ratio is
//! not preserved) and the ink raster is alpha-blended on top in the same
//! rectangle. Output is deterministic for identical inputs.

use crate::error::SessionError;
use crate::io::media::BaseImage;
use crate::models::CanvasDimensions;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};

/// A flattened, PNG-encoded raster.
#[derive(Clone, PartialEq, Eq)]
pub struct CompositedImage {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl CompositedImage {
    /// Encode an RGBA raster as PNG.
    pub fn encode(raster: &RgbaImage) -> Result<Self, SessionError> {
        let (width, height) = raster.dimensions();
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            raster.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(Self { png, width, height })
    }

    /// Wrap PNG bytes produced elsewhere, validating that they decode.
    pub fn from_png(png: Vec<u8>) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)?;
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            png,
        })
    }

    /// Decode back to an RGBA raster.
    pub fn decode(&self) -> Result<RgbaImage, image::ImageError> {
        Ok(image::load_from_memory_with_format(&self.png, ImageFormat::Png)?.to_rgba8())
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl std::fmt::Debug for CompositedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("png_len", &self.png.len())
            .finish()
    }
}

/// Flatten `base` and `ink` into a raster of exactly `dims`.
pub fn flatten(base: &BaseImage, ink: &RgbaImage, dims: CanvasDimensions) -> RgbaImage {
    let (width, height) = (dims.width(), dims.height());

    let mut output = if base.pixels().dimensions() == (width, height) {
        base.pixels().clone()
    } else {
        imageops::resize(base.pixels(), width, height, FilterType::Triangle)
    };

    if ink.dimensions() == (width, height) {
        draw_over(&mut output, ink);
    } else {
        let scaled = imageops::resize(ink, width, height, FilterType::Nearest);
        draw_over(&mut output, &scaled);
    }

    output
}

/// Source-over blend of `top` onto `bottom`. Both must have the same size.
fn draw_over(bottom: &mut RgbaImage, top: &RgbaImage) {
    for (dst, src) in bottom.pixels_mut().zip(top.pixels()) {
        dst.0 = blend_over(dst.0, src.0);
    }
}

/// Straight-alpha source-over for one pixel.
pub(crate) fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }
    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    let blend = |s: u8, d: u8| {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        ((s * src_a + d * dst_a * (1.0 - src_a)) / out_a * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    [
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}

/// Flatten and encode in one step.
pub fn composite(
    base: &BaseImage,
    ink: &RgbaImage,
    dims: CanvasDimensions,
) -> Result<CompositedImage, SessionError> {
    let flattened = flatten(base, ink, dims);
    CompositedImage::encode(&flattened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker_base() -> BaseImage {
        let img = RgbaImage::from_fn(64, 48, |x, y| {
            if (x / 8 + y / 8) % 2 == 0 {
                Rgba([240, 240, 240, 255])
            } else {
                Rgba([30, 90, 160, 255])
            }
        });
        BaseImage::from_rgba(img)
    }

    fn ink_with_block(width: u32, height: u32) -> RgbaImage {
        let mut ink = RgbaImage::new(width, height);
        for y in 40..60 {
            for x in 80..120 {
                ink.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        ink
    }

    #[test]
    fn test_composite_is_deterministic() {
        let base = checker_base();
        let ink = ink_with_block(200, 100);
        let dims = CanvasDimensions::new(200, 100);

        let first = composite(&base, &ink, dims).unwrap();
        let second = composite(&base, &ink, dims).unwrap();

        assert_eq!(first.png_bytes(), second.png_bytes());
        assert_eq!(first.decode().unwrap(), second.decode().unwrap());
        assert_eq!((first.width(), first.height()), (200, 100));
    }

    #[test]
    fn test_base_is_stretched_to_canvas() {
        let base = BaseImage::from_rgba(RgbaImage::from_pixel(10, 10, Rgba([0, 200, 0, 255])));
        let ink = RgbaImage::new(300, 50);
        let out = flatten(&base, &ink, CanvasDimensions::new(300, 50));

        assert_eq!(out.dimensions(), (300, 50));
        assert_eq!(out.get_pixel(0, 0).0, [0, 200, 0, 255]);
        assert_eq!(out.get_pixel(299, 49).0, [0, 200, 0, 255]);
    }

    #[test]
    fn test_transparent_ink_keeps_base_visible() {
        let base = BaseImage::from_rgba(RgbaImage::from_pixel(20, 10, Rgba([10, 20, 30, 255])));
        let ink = ink_with_block(200, 100);
        let out = flatten(&base, &ink, CanvasDimensions::new(200, 100));

        assert_eq!(out.get_pixel(5, 5).0, [10, 20, 30, 255]);
        assert_eq!(out.get_pixel(100, 50).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_ink_of_other_size_is_stretched() {
        let base = BaseImage::from_rgba(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));
        let mut ink = RgbaImage::new(2, 2);
        ink.put_pixel(1, 1, Rgba([255, 255, 0, 255]));
        let out = flatten(&base, &ink, CanvasDimensions::new(100, 100));

        assert_eq!(out.get_pixel(75, 75).0, [255, 255, 0, 255]);
        assert_eq!(out.get_pixel(25, 25).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_blend_over_half_alpha() {
        assert_eq!(blend_over([0, 0, 255, 255], [255, 0, 0, 0]), [0, 0, 255, 255]);
        assert_eq!(blend_over([0, 0, 255, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
        assert_eq!(blend_over([0, 0, 0, 255], [255, 255, 255, 128]), [128, 128, 128, 255]);
    }

    #[test]
    fn test_from_png_reads_dimensions() {
        let encoded = CompositedImage::encode(&RgbaImage::new(7, 3)).unwrap();
        let wrapped = CompositedImage::from_png(encoded.png_bytes().to_vec()).unwrap();
        assert_eq!((wrapped.width(), wrapped.height()), (7, 3));
        assert!(CompositedImage::from_png(b"not a png".to_vec()).is_err());
    }
}
