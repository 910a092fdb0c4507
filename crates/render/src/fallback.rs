/// Pre-encoded 1x1 PNG holding a single brand-blue RGB pixel.
///
/// IHDR (8-bit truecolor), sRGB, a stored-deflate IDAT and IEND: 85 bytes.
pub const FALLBACK_PIXEL: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, // signature
    0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00,
    0x90, 0x77, 0x53, 0xde,
    0x00, 0x00, 0x00, 0x01, 0x73, 0x52, 0x47, 0x42, // sRGB
    0x00,
    0xae, 0xce, 0x1c, 0xe9,
    0x00, 0x00, 0x00, 0x0f, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x01, 0x01, 0x04, 0x00, 0xfb, 0xff, 0x00, 0x24, 0x62, 0xbd, 0x01, 0xf1, 0x01, 0x44,
    0xe7, 0xce, 0xee, 0x1b,
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, // IEND
    0xae, 0x42, 0x60, 0x82,
];
