use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    // The body stops at the first `}`, so nested braces are not supported.
    static ref RE_ARRAY_DECL: Regex = Regex::new(
        r"const\s+unsigned\s+char\s+(?P<name>\w+)\s*\[\]\s*PROGMEM\s*=\s*\{(?P<body>[^}]*)\};"
    )
    .unwrap();
    static ref RE_HEX_BYTE: Regex = Regex::new(r"\b0x(?P<hex>[0-9a-fA-F]{1,2})\b").unwrap();
}

/// A bitmap table declared as `const unsigned char <name>[] PROGMEM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLiteral {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayMatch {
    pub literal: ArrayLiteral,
    /// Byte range of the whole declaration, including the trailing `;`
    pub span: Range<usize>,
}

/// Collects the `0x`-prefixed one or two digit hex tokens of an array body.
/// Anything else (decimal literals, identifiers, wider hex values) is skipped.
pub fn parse_bytes(body: &str) -> Vec<u8> {
    RE_HEX_BYTE
        .captures_iter(body)
        .filter_map(|caps| u8::from_str_radix(caps.name("hex")?.as_str(), 16).ok())
        .collect()
}

pub fn find_arrays(src: &str) -> impl Iterator<Item = ArrayMatch> + '_ {
    RE_ARRAY_DECL.captures_iter(src).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps.name("name")?.as_str().to_string();
        let bytes = parse_bytes(caps.name("body")?.as_str());
        Some(ArrayMatch {
            literal: ArrayLiteral { name, bytes },
            span: whole.range(),
        })
    })
}
