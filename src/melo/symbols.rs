//! 模型音素符号表
//!
//! 下标即符号 id，顺序与声学模型训练时一致

use std::collections::HashMap;

use tracing::warn;

/// 未知符号
pub const UNKNOWN_SYMBOL: &str = "UNK";

pub const SYMBOLS: [&str; 112] = [
    " ", "AA", "E", "EE", "En", "N", "OO", "V", "a", "a:", "aa", "ae", "ah", "ai", "an", "ang",
    "ao", "aw", "ay", "b", "by", "c", "ch", "d", "dh", "dy", "e", "e:", "eh", "ei", "en", "eng",
    "er", "ey", "f", "g", "gy", "h", "hh", "hy", "i", "i0", "i:", "ia", "ian", "iang", "iao", "ie",
    "ih", "in", "ing", "iong", "ir", "iu", "iy", "j", "jh", "k", "ky", "l", "m", "my", "n", "ng",
    "ny", "o", "o:", "ong", "ou", "ow", "oy", "p", "py", "q", "r", "ry", "s", "sh", "t", "th",
    "ts", "ty", "u", "u:", "ua", "uai", "uan", "uang", "uh", "ui", "un", "uo", "uw", "v", "van",
    "ve", "vn", "w", "x", "y", "z", "zh", "zy", "!", "?", "…", ",", ".", "'", "-", "SP", "UNK",
];

lazy_static::lazy_static! {
    static ref SYMBOL_IDS: HashMap<&'static str, i64> = SYMBOLS
        .iter()
        .enumerate()
        .map(|(id, symbol)| (*symbol, id as i64))
        .collect();
}

/// 符号 → id，未知符号映射为 `UNK`
pub fn symbol_id(symbol: &str) -> i64 {
    match SYMBOL_IDS.get(symbol) {
        Some(id) => *id,
        None => {
            warn!("未知音素符号: [{}]", symbol);
            SYMBOL_IDS[UNKNOWN_SYMBOL]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_unique() {
        let unique: HashSet<&str> = SYMBOLS.iter().copied().collect();
        assert_eq!(unique.len(), SYMBOLS.len());
        assert_eq!(SYMBOL_IDS.len(), SYMBOLS.len());
    }

    #[test]
    fn test_symbol_id() {
        assert_eq!(symbol_id(" "), 0);
        assert_eq!(symbol_id("V"), 7);
        assert_eq!(symbol_id("v"), 93);
        assert_eq!(symbol_id("zh"), 101);
        assert_eq!(symbol_id("…"), 105);
        assert_eq!(symbol_id("."), 107);
        assert_eq!(symbol_id("UNK"), 111);
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(symbol_id("@@"), 111);
        assert_eq!(symbol_id(""), 111);
    }
}
