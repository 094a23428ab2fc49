use std::fmt::Write;

/// Number of byte literals per line in a rendered table.
pub const BYTES_PER_LINE: usize = 12;

/// Renders `bytes` as `0x%02x` literals separated by `", "`, breaking the
/// line after every 12th literal. The separator stays before the break, so
/// inner lines end with `", "`.
pub fn body(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 6);
    for (i, v) in bytes.iter().enumerate() {
        // Writing into a String never fails.
        let _ = write!(s, "0x{v:02x}, ");
        if (i + 1) % BYTES_PER_LINE == 0 {
            s.push('\n');
        }
    }
    s.trim_matches(|c| matches!(c, ',' | ' ' | '\n')).to_string()
}

pub fn declaration(name: &str, bytes: &[u8]) -> String {
    format!("const unsigned char {name}[] PROGMEM = {{{}}};", body(bytes))
}
