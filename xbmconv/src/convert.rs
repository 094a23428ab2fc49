use crate::array::find_arrays;
use crate::array::ArrayLiteral;
use crate::bits;
use crate::call::rewrite_calls;
use crate::call::CallSite;
use crate::check::check_sizes;
use crate::check::SizeMismatch;
use crate::serialize;
use log::debug;
use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Bit-reverse and re-render `PROGMEM` byte tables
    pub arrays: bool,
    /// Rewrite disabled `drawBitmap` calls into `drawXBMP`
    pub calls: bool,
    /// Pass the original color to `setDrawColor()` instead of `1`
    pub keep_color: bool,
    /// Compare call sizes against converted array lengths
    pub check_sizes: bool,
}
impl Default for Options {
    fn default() -> Self {
        Self {
            arrays: true,
            calls: true,
            keep_color: false,
            check_sizes: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayEntry {
    pub name: String,
    pub len: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub arrays: Vec<ArrayEntry>,
    pub calls: Vec<CallSite>,
    /// Bitmaps whose non-`1` color argument was replaced by `1`
    pub discarded_colors: Vec<String>,
    pub size_mismatches: Vec<SizeMismatch>,
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub report: Report,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    opts: Options,
}
impl Converter {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }
    pub fn options(&self) -> &Options {
        &self.opts
    }
    pub fn convert(&self, src: &str) -> Conversion {
        let mut report = Report::default();
        let (text, arrays) = if self.opts.arrays {
            convert_arrays(src)
        } else {
            (src.to_string(), Vec::new())
        };
        report.arrays = arrays
            .iter()
            .map(|a| ArrayEntry {
                name: a.name.clone(),
                len: a.bytes.len(),
            })
            .collect();

        let text = if self.opts.calls {
            let (text, calls) = rewrite_calls(&text, self.opts.keep_color);
            for call in &calls {
                debug!(
                    "call: drawBitmap({}, {}, {}, {}, {}, {}) -> drawXBMP",
                    call.x, call.y, call.bitmap, call.w, call.h, call.color
                );
                if !self.opts.keep_color && call.color != "1" {
                    warn!(
                        "drawBitmap of {} used color {:?}, emitting setDrawColor(1) instead",
                        call.bitmap, call.color
                    );
                    report.discarded_colors.push(call.bitmap.clone());
                }
            }
            report.calls = calls;
            text
        } else {
            text
        };

        if self.opts.check_sizes {
            report.size_mismatches = check_sizes(&arrays, &report.calls);
            for m in &report.size_mismatches {
                warn!(
                    "{} is drawn as {}x{} ({} bytes) but has {} bytes",
                    m.bitmap, m.w, m.h, m.expected, m.actual
                );
            }
        }
        report.changed = text != src;
        Conversion {
            output: text,
            report,
        }
    }
}

/// Runs the array pass alone. Returns the new text and the converted
/// arrays (bytes already bit-reversed) in order of appearance.
pub fn convert_arrays(src: &str) -> (String, Vec<ArrayLiteral>) {
    let mut out = String::with_capacity(src.len());
    let mut arrays = Vec::new();
    let mut last = 0;
    for m in find_arrays(src) {
        let mut literal = m.literal;
        bits::reverse_all(&mut literal.bytes);
        debug!("array: {} ({} bytes)", literal.name, literal.bytes.len());
        out.push_str(&src[last..m.span.start]);
        out.push_str(&serialize::declaration(&literal.name, &literal.bytes));
        last = m.span.end;
        arrays.push(literal);
    }
    out.push_str(&src[last..]);
    (out, arrays)
}

/// Converts `src` with the default options.
pub fn convert_source(src: &str) -> String {
    Converter::default().convert(src).output
}
