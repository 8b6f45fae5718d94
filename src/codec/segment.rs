//! # 颜色段解析与格式化模块
//!
//! ## 设计思路
//!
//! 一个颜色段形如 `"r|g|b|a"`，是画作编码的最小语义单元。
//! 解析前先剥离空白与控制字符，再做小数分隔符归一化，
//! 保证从聊天框、剪贴板等渠道粘贴的编码也能解析。
//!
//! ## 实现思路
//!
//! 历史格式的归一化分两步：段内先把 `.` 换成 `,`，
//! 数值解析器再把 `,` 换回 `.`。净效果是两种分隔符都被接受，
//! 两步顺序保持与旧实现一致，行为可逐字符对照。

use crate::color::Color;

use super::numeric::parse_clamped_unit_float;
use super::FormatError;

/// 解析单个颜色段为 `Color`。
///
/// 失败是格子粒度可恢复的：调用方用不透明白色替代该格并继续。
pub fn parse_color_segment(segment: &str) -> Result<Color, FormatError> {
    let cleaned: String = segment
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let normalized = cleaned.replace('.', ",");

    let parts: Vec<&str> = normalized.split('|').collect();
    if parts.len() != 4 {
        return Err(FormatError::WrongArity(parts.len()));
    }

    let mut channels = [0.0_f32; 4];
    for (slot, part) in channels.iter_mut().zip(parts.iter()) {
        *slot = parse_clamped_unit_float(part).map_err(|err| FormatError::InvalidNumber {
            part: (*part).to_string(),
            reason: err.to_string(),
        })?;
    }

    Ok(Color::clamped(
        channels[0], channels[1], channels[2], channels[3],
    ))
}

/// 将颜色格式化为可往返的颜色段。
///
/// 固定 3 位小数、`.` 作小数点，保证解码回来每通道误差不超过 5e-4。
pub fn format_color_segment(color: &Color) -> String {
    format!(
        "{:.3}|{:.3}|{:.3}|{:.3}",
        color.r, color.g, color.b, color.a
    )
}
