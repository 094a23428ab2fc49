/// Reverses the bit order of a byte: bit 0 swaps with bit 7, bit 1 with
/// bit 6, and so on.
///
/// Converts between drivers where the MSB is the left-most pixel (Adafruit
/// GFX `drawBitmap`) and drivers where the LSB is the left-most pixel
/// (XBM, u8g2 `drawXBMP`).
pub fn reverse(v: u8) -> u8 {
    v.reverse_bits()
}

pub fn reverse_all(bytes: &mut [u8]) {
    bytes.iter_mut().for_each(|v| *v = reverse(*v));
}
