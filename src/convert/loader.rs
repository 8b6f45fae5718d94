//! # 图像加载与校验模块
//!
//! ## 设计思路
//!
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 读取字节并校验体积上限
//! 2. 仅凭图像头信息读取宽高
//! 3. 按像素/内存上限快速拒绝
//! 4. 完整解码

use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::Cursor;
use std::path::Path;

use super::{ConvertConfig, ConvertError};

/// 从内存字节加载图像，解码前先做尺寸与资源上限校验。
pub fn load_image_from_memory(
    bytes: &[u8],
    config: &ConvertConfig,
) -> Result<DynamicImage, ConvertError> {
    if bytes.len() as u64 > config.max_file_size {
        return Err(ConvertError::ResourceLimit(format!(
            "图像体积过大：{} 字节（限制：{} 字节）",
            bytes.len(),
            config.max_file_size
        )));
    }

    let (header_width, header_height) = inspect_dimensions_from_memory(bytes)?;
    validate_pixel_limits(config, header_width, header_height)?;
    validate_decoded_memory_limits(config, header_width, header_height)?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ConvertError::Decode(format!("图像解码失败：{}", e)))?;

    // 头信息可能与实际解码结果不一致，解码后复核一次
    let (width, height) = decoded.dimensions();
    validate_pixel_limits(config, width, height)?;
    validate_decoded_memory_limits(config, width, height)?;

    log::debug!("图像加载完成 - {}x{}", width, height);
    Ok(decoded)
}

/// 从本地文件加载图像。
pub fn load_image_from_path(
    path: impl AsRef<Path>,
    config: &ConvertConfig,
) -> Result<DynamicImage, ConvertError> {
    let path = path.as_ref();

    let metadata = std::fs::metadata(path)
        .map_err(|e| ConvertError::FileSystem(format!("无法读取文件元数据：{}", e)))?;
    if metadata.len() > config.max_file_size {
        return Err(ConvertError::ResourceLimit(format!(
            "图像文件过大：{} 字节（限制：{} 字节）",
            metadata.len(),
            config.max_file_size
        )));
    }

    log::debug!("开始读取本地图像 - 路径: {}", path.display());
    let bytes = std::fs::read(path)
        .map_err(|e| ConvertError::FileSystem(format!("读取文件失败：{}", e)))?;

    load_image_from_memory(&bytes, config)
}

/// 仅通过内存中的图像头信息读取宽高。
///
/// 用于在完整解码前做像素限制检查。
fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), ConvertError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| ConvertError::InvalidFormat(format!("无法识别图像格式：{}", e)))?;

    reader
        .into_dimensions()
        .map_err(|e| ConvertError::InvalidFormat(format!("无法读取图像尺寸：{}", e)))
}

/// 校验像素数量是否超过配置上限。
fn validate_pixel_limits(
    config: &ConvertConfig,
    width: u32,
    height: u32,
) -> Result<(), ConvertError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| ConvertError::ResourceLimit("图像像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(ConvertError::ResourceLimit(format!(
            "图像像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}

fn validate_decoded_memory_limits(
    config: &ConvertConfig,
    width: u32,
    height: u32,
) -> Result<(), ConvertError> {
    let estimated = (width as u64)
        .checked_mul(height as u64)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| ConvertError::ResourceLimit("图像解码内存估算溢出".to_string()))?;

    if estimated > config.max_decoded_bytes {
        return Err(ConvertError::ResourceLimit(format!(
            "图像解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
            estimated as f64 / 1024.0 / 1024.0,
            config.max_decoded_bytes as f64 / 1024.0 / 1024.0
        )));
    }

    Ok(())
}
