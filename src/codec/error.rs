//! # 画作格式错误模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载画作编码解析中的所有失败来源，
//! 调用侧可按分支匹配；`thiserror` 保持人类可读错误消息。
//!
//! 所有变体在解码层面都是格子粒度可恢复的：单格失败回退为白色，
//! 绝不中断整幅画作的解码。

/// 画作编码解析错误。
///
/// 该类型只在单格/单数值粒度出现，`decode_cells` 会将其吞掉并记录日志。
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// 数值文本为空字符串。
    #[error("数值文本为空")]
    Empty,

    /// 数值文本在该位置出现了不允许的字符。
    ///
    /// 包括第二个小数分隔符与非首位的负号。
    #[error("数值文本包含非法字符 '{ch}'（位置 {index}）")]
    InvalidCharacter { ch: char, index: usize },

    /// 颜色段按 `|` 切分后不是恰好 4 个分量。
    #[error("颜色段应有 4 个分量，实际为 {0} 个")]
    WrongArity(usize),

    /// 4 个分量之一未能通过数值解析。
    #[error("颜色分量 '{part}' 解析失败：{reason}")]
    InvalidNumber { part: String, reason: String },
}
