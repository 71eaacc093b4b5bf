//! 数字读法展开
//!
//! 把句子中的阿拉伯数字串改写成中文读法：
//! - 整数按万/亿/兆分节读（`12345` → 一万二千三百四十五）
//! - 小数部分逐位读（`3.14` → 三点一四）
//! - 负号、百分号（`-5%` → 负百分之五）
//! - 紧跟「年」的整数逐位读（`2024年` → 二零二四年）

use tracing::warn;

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 节内位权
const PLACE_UNITS: [&str; 4] = ["", "十", "百", "千"];

/// 节权
const SECTION_UNITS: [&str; 4] = ["", "万", "亿", "兆"];

/// 分节读法上限（不含），即最多 16 位整数
const MAX_GROUPED_NUMBER: u64 = 10_000_000_000_000_000;

/// 数字/非数字片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumericRun {
    pub is_numeric: bool,
    pub text: String,
}

impl NumericRun {
    fn new(is_numeric: bool, text: String) -> Self {
        Self { is_numeric, text }
    }
}

/// 数字展开器
pub struct NumberExpander;

impl NumberExpander {
    /// 将句子中所有数字串替换为中文读法
    pub fn expand(sentence: &str) -> String {
        let mut runs = Self::split_runs(sentence);

        for i in 0..runs.len() {
            if !runs[i].is_numeric {
                continue;
            }
            let year_follows = runs
                .get(i + 1)
                .is_some_and(|next| !next.is_numeric && next.text.starts_with('年'));
            let chinese = Self::read_run(&runs[i].text, year_follows);
            runs[i].text = chinese;
        }

        runs.into_iter().map(|run| run.text).collect()
    }

    /// 读一个完整的数字串（可带负号、小数点、百分号）
    fn read_run(run: &str, year_follows: bool) -> String {
        let mut chinese = String::new();
        let mut number = run;

        if let Some(rest) = number.strip_prefix('-') {
            chinese.push('负');
            number = rest;
        }
        if let Some(rest) = number.strip_suffix('%') {
            chinese.push_str("百分之");
            number = rest;
        }

        match number.split_once('.') {
            None if year_follows => chinese.push_str(&Self::read_digits(number)),
            None => chinese.push_str(&Self::read_integer(number)),
            Some((integer, decimal)) => {
                if integer.is_empty() {
                    chinese.push('零');
                } else {
                    chinese.push_str(&Self::read_integer(integer));
                }
                if !decimal.is_empty() {
                    chinese.push('点');
                    chinese.push_str(&Self::read_digits(decimal));
                }
            }
        }

        if chinese == "负零" {
            return "零".to_string();
        }
        if let Some(rest) = chinese.strip_prefix("二千") {
            return format!("两千{}", rest);
        }
        chinese
    }

    /// 逐位读（日期、小数部分）
    fn read_digits(text: &str) -> String {
        text.chars()
            .map(|ch| match ch {
                '.' => '点',
                _ => ch
                    .to_digit(10)
                    .map(|d| DIGITS[d as usize])
                    .unwrap_or(ch),
            })
            .collect()
    }

    /// 整数按位权读，超出 16 位时退化为逐位读
    fn read_integer(text: &str) -> String {
        match text.parse::<u64>() {
            Ok(number) if number < MAX_GROUPED_NUMBER => Self::read_grouped(number),
            _ => {
                warn!("数字 [{}] 超出分节读法范围，按逐位读", text);
                Self::read_digits(text)
            }
        }
    }

    /// 分节读法：每 4 位一节，节权 万/亿/兆
    fn read_grouped(number: u64) -> String {
        let mut result = String::new();
        let mut number = number;

        for unit in SECTION_UNITS {
            let part = number % 10000;
            if part == 0 {
                // 连续零只保留一个
                if !result.starts_with('零') {
                    result.insert(0, '零');
                }
            } else {
                result = format!("{}{}{}", Self::read_section(part), unit, result);
                // 非最高节且不足千位，补零（一千零五、一万零五）
                if part < 1000 && number >= 10000 {
                    result.insert(0, '零');
                }
            }
            number /= 10000;
        }

        let trimmed = result.trim_matches('零');
        if trimmed.is_empty() {
            "零".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// 读一节（0 < part < 10000）
    fn read_section(part: u64) -> String {
        let mut result = String::new();
        let mut part = part;

        for unit in PLACE_UNITS {
            let digit = (part % 10) as usize;
            if digit == 0 {
                if !result.starts_with('零') {
                    result.insert(0, '零');
                }
            } else {
                result = format!("{}{}{}", DIGITS[digit], unit, result);
            }
            part /= 10;
        }

        let trimmed = result.trim_matches('零');
        // 一十三 -> 十三
        match trimmed.strip_prefix('一') {
            Some(rest) if rest.starts_with('十') => rest.to_string(),
            _ => trimmed.to_string(),
        }
    }

    fn flush(runs: &mut Vec<NumericRun>, current: &mut String, is_numeric: bool) {
        if !current.is_empty() {
            runs.push(NumericRun::new(is_numeric, std::mem::take(current)));
        }
    }

    /// 切分数字/非数字片段
    ///
    /// 逐字符扫描，向前看一位：
    /// - `-` 后跟数字才开启数字串
    /// - `.` 后跟数字才延续或开启数字串
    /// - `%` 在数字串内时收尾
    pub(crate) fn split_runs(sentence: &str) -> Vec<NumericRun> {
        let chars: Vec<char> = sentence.chars().collect();
        let mut runs = Vec::new();
        let mut current = String::new();
        let mut is_numeric = false;

        for (i, &ch) in chars.iter().enumerate() {
            let next_is_digit = chars.get(i + 1).is_some_and(|c| c.is_ascii_digit());

            match ch {
                '-' if next_is_digit => {
                    Self::flush(&mut runs, &mut current, is_numeric);
                    current.push(ch);
                    is_numeric = true;
                }
                '.' if next_is_digit => {
                    if !is_numeric {
                        Self::flush(&mut runs, &mut current, is_numeric);
                        is_numeric = true;
                    }
                    current.push(ch);
                }
                '%' if is_numeric => {
                    current.push(ch);
                    Self::flush(&mut runs, &mut current, is_numeric);
                    is_numeric = false;
                }
                _ if ch.is_ascii_digit() => {
                    if !is_numeric {
                        Self::flush(&mut runs, &mut current, is_numeric);
                        is_numeric = true;
                    }
                    current.push(ch);
                }
                _ => {
                    if is_numeric {
                        Self::flush(&mut runs, &mut current, is_numeric);
                        is_numeric = false;
                    }
                    current.push(ch);
                }
            }
        }
        Self::flush(&mut runs, &mut current, is_numeric);

        runs
    }
}

/// 便捷函数：展开句子中的数字
pub fn expand_number(sentence: &str) -> String {
    NumberExpander::expand(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_integer() {
        assert_eq!(expand_number("123"), "一百二十三");
        assert_eq!(expand_number("0"), "零");
        assert_eq!(expand_number("10"), "十");
        assert_eq!(expand_number("15"), "十五");
        assert_eq!(expand_number("110"), "一百一十");
        assert_eq!(expand_number("12345"), "一万二千三百四十五");
    }

    #[test]
    fn test_expand_decimal_sign_percent() {
        assert_eq!(expand_number("3.14"), "三点一四");
        assert_eq!(expand_number("-5%"), "负百分之五");
        assert_eq!(expand_number(".5"), "零点五");
        assert_eq!(expand_number("-0"), "零");
        assert_eq!(expand_number("-0.5"), "负零点五");
        assert_eq!(expand_number("12.5%"), "百分之十二点五");
    }

    #[test]
    fn test_expand_two_thousand() {
        assert_eq!(expand_number("2000"), "两千");
        assert_eq!(expand_number("2500"), "两千五百");
        assert_eq!(expand_number("-2000"), "负二千");
    }

    #[test]
    fn test_expand_zero_placeholders() {
        assert_eq!(expand_number("1005"), "一千零五");
        assert_eq!(expand_number("10005"), "一万零五");
        assert_eq!(expand_number("100000"), "十万");
        assert_eq!(expand_number("100000000"), "一亿");
        assert_eq!(expand_number("100010000"), "一亿零一万");
        assert_eq!(expand_number("1000000000000"), "一兆");
    }

    #[test]
    fn test_expand_year() {
        assert_eq!(expand_number("2024年"), "二零二四年");
        assert_eq!(expand_number("1999年12月"), "一九九九年十二月");
        // 年不紧跟时按位权读
        assert_eq!(expand_number("2024 年"), "两千零二十四 年");
    }

    #[test]
    fn test_expand_in_sentence() {
        assert_eq!(expand_number("电话是12345"), "电话是一万二千三百四十五");
        assert_eq!(expand_number("涨了3.5%左右"), "涨了百分之三点五左右");
        assert_eq!(expand_number("no digits"), "no digits");
        assert_eq!(expand_number(""), "");
    }

    #[test]
    fn test_expand_literal_sign_and_dot() {
        // 不跟数字的 - . % 原样保留
        assert_eq!(expand_number("a-b"), "a-b");
        assert_eq!(expand_number("end."), "end.");
        assert_eq!(expand_number("5."), "五.");
        assert_eq!(expand_number("100%"), "百分之一百");
        assert_eq!(expand_number("%5"), "%五");
    }

    #[test]
    fn test_expand_too_long_reads_digits() {
        assert_eq!(
            expand_number("12345678901234567"),
            "一二三四五六七八九零一二三四五六七"
        );
    }

    #[test]
    fn test_split_runs() {
        let runs = NumberExpander::split_runs("价格-3.5%，共12个");
        let texts: Vec<(bool, &str)> = runs
            .iter()
            .map(|r| (r.is_numeric, r.text.as_str()))
            .collect();
        assert_eq!(
            texts,
            vec![
                (false, "价格"),
                (true, "-3.5%"),
                (false, "，共"),
                (true, "12"),
                (false, "个"),
            ]
        );
    }

    #[test]
    fn test_split_runs_dot_closes_number() {
        let runs = NumberExpander::split_runs("7.x");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], NumericRun::new(true, "7".to_string()));
        assert_eq!(runs[1], NumericRun::new(false, ".x".to_string()));
    }
}
