use crate::array::ArrayLiteral;
use crate::call::CallSite;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeMismatch {
    pub bitmap: String,
    pub w: u32,
    pub h: u32,
    pub expected: usize,
    pub actual: usize,
}

/// Parses a decimal or `0x` hex integer literal. Expressions are not
/// evaluated and yield None.
pub fn parse_int_literal(s: &str) -> Option<u32> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

/// XBM rows are padded to whole bytes.
pub fn expected_len(w: u32, h: u32) -> usize {
    (w as usize).div_ceil(8) * h as usize
}

/// Compares each call's `w`/`h` against the size of the array it draws.
/// Calls that reference unknown arrays or non-literal sizes are skipped.
/// When a name is declared more than once, the last declaration wins.
pub fn check_sizes(arrays: &[ArrayLiteral], calls: &[CallSite]) -> Vec<SizeMismatch> {
    calls
        .iter()
        .filter_map(|call| {
            let array = arrays.iter().rev().find(|a| a.name == call.bitmap)?;
            let w = parse_int_literal(&call.w)?;
            let h = parse_int_literal(&call.h)?;
            let expected = expected_len(w, h);
            let actual = array.bytes.len();
            (expected != actual).then(|| SizeMismatch {
                bitmap: call.bitmap.clone(),
                w,
                h,
                expected,
                actual,
            })
        })
        .collect()
}
