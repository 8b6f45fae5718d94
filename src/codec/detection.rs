//! # 画作编码特征检测模块
//!
//! ## 设计思路
//!
//! 宿主侧常常需要判断一段文本（剪贴板、聊天输入）是否像画作编码，
//! 以决定是否走导入流程。本模块提供一个快速启发式判断，
//! 不承诺能解析成功，只过滤明显不相关的文本。
//!
//! ## 实现思路
//!
//! - 通过 `once_cell::sync::Lazy` 在首次调用时编译正则，后续零成本复用。
//! - 按 `;` 切段后逐段匹配 `r|g|b|a` 形状，不少于半数匹配即判定为编码。

use once_cell::sync::Lazy;
use regex::Regex;

/// 预编译的颜色段形状正则。
///
/// 匹配 `数|数|数|数`，数字允许可选负号与 `.`/`,` 小数部分。
static SEGMENT_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^-?(?:[0-9]+(?:[.,][0-9]*)?|[.,][0-9]+)(?:\|-?(?:[0-9]+(?:[.,][0-9]*)?|[.,][0-9]+)){3}$",
    )
    .expect("颜色段正则应当合法")
});

/// 判断文本是否可能是画作编码。
///
/// - 过短文本（容不下一个最小段 `0|0|0|0`）直接排除。
/// - 不少于半数的非空段呈 `r|g|b|a` 形状时判定为编码。
pub fn is_likely_painting_code(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.len() < 7 {
        return false;
    }

    let mut total = 0usize;
    let mut matched = 0usize;
    for segment in trimmed.split(';') {
        let cleaned: String = segment
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect();
        if cleaned.is_empty() {
            continue;
        }
        total += 1;
        if SEGMENT_SHAPE.is_match(&cleaned) {
            matched += 1;
        }
    }

    total > 0 && matched * 2 >= total
}
