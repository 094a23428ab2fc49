//! Ports monochrome bitmaps in Arduino sketches from Adafruit GFX
//! `drawBitmap` (MSB is the left-most pixel) to u8g2 `drawXBMP`
//! (LSB is the left-most pixel).
//!
//! The conversion is two text passes over the whole source:
//! `const unsigned char <name>[] PROGMEM = {...};` tables get every byte
//! bit-reversed and re-rendered, then commented-out
//! `//display.drawBitmap(x, y, bitmap, w, h, color[, bg]);` calls become
//! `display.setDrawColor(1); display.drawXBMP(x, y, w, h, bitmap);`.

pub mod array;
pub mod bits;
pub mod call;
pub mod check;
pub mod convert;
pub mod file;
pub mod serialize;

pub use convert::convert_source;
pub use convert::Conversion;
pub use convert::Converter;
pub use convert::Options;
pub use convert::Report;
pub use file::convert_file;
pub use file::Mode;
