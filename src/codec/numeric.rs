//! # 单位区间数值解析模块
//!
//! ## 设计思路
//!
//! 画作编码里的通道值来自历史遗留格式：小数点既可能是 `.` 也可能是 `,`，
//! 且约定越界值钳制而不是拒绝。标准库的 `f32::from_str` 无法表达这些规则，
//! 因此这里按字符手写解析，行为完全确定。
//!
//! ## 实现思路
//!
//! - 先把 `,` 统一替换为 `.`，之后只认 `.` 为小数点。
//! - 负号仅允许出现在首位；第二个小数点按非法字符处理。
//! - 整数部分饱和累加，反正结果最终钳制到 `[0.0, 1.0]`。

use super::FormatError;

/// 解析单位区间浮点数。
///
/// 接受可选首位负号、数字、至多一个小数分隔符（`.` 或 `,`）。
/// 解析结果钳制到 `[0.0, 1.0]` —— 负值与超过 1 的值静默钳制，
/// 这是格式契约的一部分，不是缺陷。
///
/// 历史行为保留：`"-"`、`"."`、`"-."` 均解析为 `0.0`
/// （非空但无数字不算错误）。
pub fn parse_clamped_unit_float(text: &str) -> Result<f32, FormatError> {
    if text.is_empty() {
        return Err(FormatError::Empty);
    }

    let normalized = text.replace(',', ".");

    let mut negative = false;
    let mut int_part: u64 = 0;
    let mut frac_part: f32 = 0.0;
    let mut frac_divisor: f32 = 1.0;
    let mut in_fraction = false;

    for (index, ch) in normalized.chars().enumerate() {
        match ch {
            '-' if index == 0 => negative = true,
            '.' if !in_fraction => in_fraction = true,
            '0'..='9' => {
                let digit = ch as u64 - '0' as u64;
                if in_fraction {
                    frac_divisor *= 10.0;
                    frac_part += digit as f32 / frac_divisor;
                } else {
                    int_part = int_part.saturating_mul(10).saturating_add(digit);
                }
            }
            other => {
                return Err(FormatError::InvalidCharacter { ch: other, index });
            }
        }
    }

    let mut value = int_part as f32 + frac_part;
    if negative {
        value = -value;
    }

    Ok(value.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fraction() {
        assert_eq!(parse_clamped_unit_float("0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_comma_separator_equivalent_to_dot() {
        assert_eq!(
            parse_clamped_unit_float("0,25").unwrap(),
            parse_clamped_unit_float("0.25").unwrap()
        );
    }

    #[test]
    fn test_above_one_clamps_to_one() {
        assert_eq!(parse_clamped_unit_float("1.5").unwrap(), 1.0);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(parse_clamped_unit_float("-0.5").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_is_error() {
        assert!(matches!(
            parse_clamped_unit_float(""),
            Err(FormatError::Empty)
        ));
    }

    #[test]
    fn test_second_separator_is_invalid_character() {
        assert!(matches!(
            parse_clamped_unit_float("0.5.1"),
            Err(FormatError::InvalidCharacter { ch: '.', index: 3 })
        ));
    }

    #[test]
    fn test_mixed_separators_also_rejected() {
        // "0,5.1" 归一化后等价于 "0.5.1"
        assert!(parse_clamped_unit_float("0,5.1").is_err());
    }

    #[test]
    fn test_sign_not_at_start_is_invalid() {
        assert!(matches!(
            parse_clamped_unit_float("0-5"),
            Err(FormatError::InvalidCharacter { ch: '-', index: 1 })
        ));
    }

    #[test]
    fn test_letter_is_invalid() {
        assert!(matches!(
            parse_clamped_unit_float("0.5a"),
            Err(FormatError::InvalidCharacter { ch: 'a', .. })
        ));
    }

    #[test]
    fn test_legacy_digitless_inputs_parse_to_zero() {
        assert_eq!(parse_clamped_unit_float("-").unwrap(), 0.0);
        assert_eq!(parse_clamped_unit_float(".").unwrap(), 0.0);
        assert_eq!(parse_clamped_unit_float("-.").unwrap(), 0.0);
    }

    #[test]
    fn test_long_integer_saturates_then_clamps() {
        assert_eq!(
            parse_clamped_unit_float("99999999999999999999999").unwrap(),
            1.0
        );
    }

    #[test]
    fn test_fraction_digit_weighting() {
        let value = parse_clamped_unit_float("0.125").unwrap();
        assert!((value - 0.125).abs() < 1e-6);
    }
}
