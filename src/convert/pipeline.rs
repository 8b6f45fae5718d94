//! # 图像重采样与编码流水线模块
//!
//! ## 设计思路
//!
//! 将"任意尺寸图像 → 画布网格 → 画作编码"的过程集中管理。
//! 重采样优先走 `fast_image_resize`，失败时回退 `image::resize_exact`，
//! 两条路径产出相同尺寸的网格。
//!
//! ## 实现思路
//!
//! 1. 将源图重采样到 `width × height` 的网格尺寸
//! 2. 逐像素换算为归一化颜色
//! 3. 交给 codec 编码为画作字符串

use fast_image_resize as fr;
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::codec::encode_cells;
use crate::color::{Color, ColorGrid};

use super::{ConvertConfig, ConvertError};

/// 将图像重采样为画布网格。
///
/// 前置条件：`height >= 1` 且 `width >= 1`。
pub fn image_to_grid(
    image: &DynamicImage,
    height: usize,
    width: usize,
    config: &ConvertConfig,
) -> Result<ColorGrid, ConvertError> {
    let resized = resample_to_grid(image, width as u32, height as u32, config)?;

    let mut cells = Vec::with_capacity(height * width);
    for pixel in resized.pixels() {
        cells.push(Color::from_rgba8(pixel.0));
    }

    ColorGrid::from_cells(height, width, cells)
        .ok_or_else(|| ConvertError::Encode("重采样输出与网格尺寸不一致".to_string()))
}

/// 将图像转换为画作编码字符串。
pub fn image_to_code(
    image: &DynamicImage,
    height: usize,
    width: usize,
    config: &ConvertConfig,
) -> Result<String, ConvertError> {
    let grid = image_to_grid(image, height, width, config)?;
    log::info!("图像已转换为画作编码 - 网格: {}x{}", width, height);
    Ok(encode_cells(&grid))
}

/// 将像素缓冲保存为 PNG 文件。
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), ConvertError> {
    image
        .save_with_format(path.as_ref(), image::ImageFormat::Png)
        .map_err(|e| ConvertError::FileSystem(format!("保存 PNG 失败：{}", e)))
}

fn resample_to_grid(
    image: &DynamicImage,
    target_width: u32,
    target_height: u32,
    config: &ConvertConfig,
) -> Result<RgbaImage, ConvertError> {
    match resize_with_fast_image_resize(image, target_width, target_height, config.resize_filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!("fast_image_resize 重采样失败，回退 image::resize_exact：{}", err);
            Ok(image
                .resize_exact(target_width, target_height, config.resize_filter)
                .to_rgba8())
        }
    }
}

fn resize_with_fast_image_resize(
    image: &DynamicImage,
    target_width: u32,
    target_height: u32,
    filter: image::imageops::FilterType,
) -> Result<RgbaImage, ConvertError> {
    let src = image.to_rgba8();
    let (src_width, src_height) = src.dimensions();

    let src_image =
        fr::images::Image::from_vec_u8(src_width, src_height, src.into_raw(), fr::PixelType::U8x4)
            .map_err(|e| ConvertError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(to_fast_alg(filter));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ConvertError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| ConvertError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_alg(filter: image::imageops::FilterType) -> fr::ResizeAlg {
    match filter {
        // 像素画降采样用真正的最近邻，而不是 Box 卷积
        image::imageops::FilterType::Nearest => fr::ResizeAlg::Nearest,
        image::imageops::FilterType::Triangle => {
            fr::ResizeAlg::Convolution(fr::FilterType::Bilinear)
        }
        image::imageops::FilterType::CatmullRom => {
            fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom)
        }
        image::imageops::FilterType::Gaussian => {
            fr::ResizeAlg::Convolution(fr::FilterType::Mitchell)
        }
        image::imageops::FilterType::Lanczos3 => {
            fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_cells;

    fn checker_image(size: u32) -> DynamicImage {
        let image = RgbaImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 0, 0, 255])
            } else {
                image::Rgba([0, 0, 255, 255])
            }
        });
        DynamicImage::ImageRgba8(image)
    }

    #[test]
    fn test_identity_size_grid_keeps_pixels() {
        let image = checker_image(2);
        let grid = image_to_grid(&image, 2, 2, &ConvertConfig::default()).unwrap();
        assert!(grid.get(0, 0).approx_eq(Color::clamped(1.0, 0.0, 0.0, 1.0), 1e-3));
        assert!(grid.get(0, 1).approx_eq(Color::clamped(0.0, 0.0, 1.0, 1.0), 1e-3));
    }

    #[test]
    fn test_downscale_produces_requested_grid() {
        let image = checker_image(16);
        let grid = image_to_grid(&image, 4, 4, &ConvertConfig::default()).unwrap();
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 4);
    }

    #[test]
    fn test_image_code_round_trip() {
        let image = checker_image(4);
        let code = image_to_code(&image, 4, 4, &ConvertConfig::default()).unwrap();
        let grid = decode_cells(&code, 4, 4);
        assert!(grid.get(0, 0).approx_eq(Color::clamped(1.0, 0.0, 0.0, 1.0), 1e-3));
        assert!(grid.get(1, 0).approx_eq(Color::clamped(0.0, 0.0, 1.0, 1.0), 1e-3));
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = std::env::temp_dir().join("painting_codec_pipeline_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.png");

        let image = RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));
        save_png(&image, &path).unwrap();
        assert!(path.exists());

        std::fs::remove_file(&path).ok();
    }
}
