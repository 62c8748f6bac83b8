//! sRGB color parsing and conversion: hex strings, 8-bit and unit-interval channels, and the
//! xterm 256-color palette.

pub(crate) mod ansi256;
pub(crate) mod codec;
