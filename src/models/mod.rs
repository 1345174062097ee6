/// Decoded boleto barcode and its fields
pub mod boleto;
/// Scanline samples and element widths
pub mod scanline;

pub use boleto::{BarcodeBlock, BoletoBarcode};
pub use scanline::{Scanline, Width};
