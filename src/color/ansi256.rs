use crate::color::codec::Rgb8;

/// xterm defaults for the 16 system colors.
const SYSTEM: [Rgb8; 16] = [
    Rgb8::new(0x00, 0x00, 0x00),
    Rgb8::new(0x80, 0x00, 0x00),
    Rgb8::new(0x00, 0x80, 0x00),
    Rgb8::new(0x80, 0x80, 0x00),
    Rgb8::new(0x00, 0x00, 0x80),
    Rgb8::new(0x80, 0x00, 0x80),
    Rgb8::new(0x00, 0x80, 0x80),
    Rgb8::new(0xc0, 0xc0, 0xc0),
    Rgb8::new(0x80, 0x80, 0x80),
    Rgb8::new(0xff, 0x00, 0x00),
    Rgb8::new(0x00, 0xff, 0x00),
    Rgb8::new(0xff, 0xff, 0x00),
    Rgb8::new(0x00, 0x00, 0xff),
    Rgb8::new(0xff, 0x00, 0xff),
    Rgb8::new(0x00, 0xff, 0xff),
    Rgb8::new(0xff, 0xff, 0xff),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// RGB value of an xterm 256-color palette index.
pub fn palette_rgb(idx: u8) -> Rgb8 {
    match idx {
        0..=15 => SYSTEM[idx as usize],
        16..=231 => {
            let i = idx - 16;
            Rgb8::new(
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i % 36) / 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        232..=255 => {
            let v = 8 + 10 * (idx - 232);
            Rgb8::new(v, v, v)
        }
    }
}

/// Nearest palette index by sum of squared channel differences.
///
/// The scan runs from index 0 upward and only replaces the best match on a strictly smaller
/// distance, so ties resolve to the lowest index.
pub fn nearest(c: Rgb8) -> u8 {
    let mut best_idx = 0u8;
    let mut best_dist = u32::MAX;
    for idx in 0..=255u8 {
        let d = distance_sq(c, palette_rgb(idx));
        if d < best_dist {
            best_dist = d;
            best_idx = idx;
            if d == 0 {
                break;
            }
        }
    }
    best_idx
}

fn distance_sq(a: Rgb8, b: Rgb8) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/color/ansi256.rs"]
mod tests;
