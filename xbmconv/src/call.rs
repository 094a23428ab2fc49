use lazy_static::lazy_static;
use regex::Captures;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref RE_DISABLED_DRAW_BITMAP: Regex = Regex::new(
        r"//\s*display\.drawBitmap\s*\(\s*(?P<x>[^,]+),\s*(?P<y>[^,]+),\s*(?P<bitmap>[^,]+),\s*(?P<w>[^,]+),\s*(?P<h>[^,]+),\s*(?P<rest>[^)]+)\);"
    )
    .unwrap();
}

/// A commented-out Adafruit GFX style
/// `display.drawBitmap(x, y, bitmap, w, h, color[, bg])` call.
/// Every field is the trimmed source text of the argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    pub x: String,
    pub y: String,
    pub bitmap: String,
    pub w: String,
    pub h: String,
    pub color: String,
    pub bg: Option<String>,
}
impl CallSite {
    fn from_captures(caps: &Captures) -> Option<Self> {
        let field = |name: &str| caps.name(name).map(|m| m.as_str().trim().to_string());
        let rest = caps.name("rest")?.as_str();
        let (color, bg) = match rest.split_once(',') {
            Some((color, bg)) => (color.trim(), Some(bg.trim())),
            None => (rest.trim(), None),
        };
        Some(Self {
            x: field("x")?,
            y: field("y")?,
            bitmap: field("bitmap")?,
            w: field("w")?,
            h: field("h")?,
            color: color.to_string(),
            bg: bg.filter(|s| !s.is_empty()).map(|s| s.to_string()),
        })
    }
    /// Color passed to `setDrawColor()` in the rewritten form.
    pub fn draw_color(&self, keep_color: bool) -> &str {
        if keep_color {
            &self.color
        } else {
            "1"
        }
    }
    /// u8g2 takes the size before the bitmap and the color as a separate
    /// state, so one call becomes two statements.
    pub fn to_source(&self, keep_color: bool) -> String {
        let Self {
            x, y, bitmap, w, h, ..
        } = self;
        format!(
            "display.setDrawColor({}); display.drawXBMP({x}, {y}, {w}, {h}, {bitmap});",
            self.draw_color(keep_color)
        )
    }
}

pub fn find_calls(src: &str) -> impl Iterator<Item = CallSite> + '_ {
    RE_DISABLED_DRAW_BITMAP
        .captures_iter(src)
        .filter_map(|caps| CallSite::from_captures(&caps))
}

/// Rewrites every disabled `drawBitmap` call. Returns the new text and the
/// rewritten calls in order of appearance.
pub fn rewrite_calls(src: &str, keep_color: bool) -> (String, Vec<CallSite>) {
    let mut sites = Vec::new();
    let output = RE_DISABLED_DRAW_BITMAP.replace_all(src, |caps: &Captures| {
        match CallSite::from_captures(caps) {
            Some(site) => {
                let s = site.to_source(keep_color);
                sites.push(site);
                s
            }
            None => caps.get(0).map_or("", |m| m.as_str()).to_string(),
        }
    });
    (output.into_owned(), sites)
}
