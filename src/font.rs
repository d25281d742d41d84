pub mod glyphs {
    //! Tiny 3x5 bitmap font for overlay captions.
    //!
    //! Each glyph is five rows of three bits, most significant bit leftmost.
    //! Lowercase letters render as uppercase; anything unknown is a solid block.

    pub const GLYPH_WIDTH: usize = 3;
    pub const GLYPH_HEIGHT: usize = 5;

    /// Horizontal advance per character, in unscaled pixels.
    pub const ADVANCE: usize = GLYPH_WIDTH + 1;

    pub fn glyph(c: char) -> [u8; GLYPH_HEIGHT] {
        match c.to_ascii_uppercase() {
            '0' => [0x7, 0x5, 0x5, 0x5, 0x7],
            '1' => [0x2, 0x6, 0x2, 0x2, 0x7],
            '2' => [0x7, 0x1, 0x7, 0x4, 0x7],
            '3' => [0x7, 0x1, 0x7, 0x1, 0x7],
            '4' => [0x5, 0x5, 0x7, 0x1, 0x1],
            '5' => [0x7, 0x4, 0x7, 0x1, 0x7],
            '6' => [0x7, 0x4, 0x7, 0x5, 0x7],
            '7' => [0x7, 0x1, 0x2, 0x4, 0x4],
            '8' => [0x7, 0x5, 0x7, 0x5, 0x7],
            '9' => [0x7, 0x5, 0x7, 0x1, 0x7],
            'A' => [0x2, 0x5, 0x7, 0x5, 0x5],
            'B' => [0x6, 0x5, 0x6, 0x5, 0x6],
            'C' => [0x7, 0x4, 0x4, 0x4, 0x7],
            'D' => [0x6, 0x5, 0x5, 0x5, 0x6],
            'E' => [0x7, 0x4, 0x6, 0x4, 0x7],
            'F' => [0x7, 0x4, 0x6, 0x4, 0x4],
            'G' => [0x7, 0x4, 0x5, 0x5, 0x7],
            'H' => [0x5, 0x5, 0x7, 0x5, 0x5],
            'I' => [0x7, 0x2, 0x2, 0x2, 0x7],
            'J' => [0x1, 0x1, 0x1, 0x5, 0x7],
            'K' => [0x5, 0x5, 0x6, 0x5, 0x5],
            'L' => [0x4, 0x4, 0x4, 0x4, 0x7],
            'M' => [0x5, 0x7, 0x7, 0x5, 0x5],
            'N' => [0x6, 0x5, 0x5, 0x5, 0x5],
            'O' => [0x7, 0x5, 0x5, 0x5, 0x7],
            'P' => [0x7, 0x5, 0x7, 0x4, 0x4],
            'Q' => [0x7, 0x5, 0x5, 0x7, 0x1],
            'R' => [0x6, 0x5, 0x6, 0x5, 0x5],
            'S' => [0x3, 0x4, 0x2, 0x1, 0x6],
            'T' => [0x7, 0x2, 0x2, 0x2, 0x2],
            'U' => [0x5, 0x5, 0x5, 0x5, 0x7],
            'V' => [0x5, 0x5, 0x5, 0x5, 0x2],
            'W' => [0x5, 0x5, 0x7, 0x7, 0x5],
            'X' => [0x5, 0x5, 0x2, 0x5, 0x5],
            'Y' => [0x5, 0x5, 0x2, 0x2, 0x2],
            'Z' => [0x7, 0x1, 0x2, 0x4, 0x7],
            ' ' => [0x0, 0x0, 0x0, 0x0, 0x0],
            ':' => [0x0, 0x2, 0x0, 0x2, 0x0],
            '.' => [0x0, 0x0, 0x0, 0x0, 0x2],
            ',' => [0x0, 0x0, 0x0, 0x2, 0x4],
            '-' => [0x0, 0x0, 0x7, 0x0, 0x0],
            _ => [0x7, 0x7, 0x7, 0x7, 0x7],
        }
    }

    /// Whether pixel (`col`, `row`) of the glyph is lit.
    pub fn is_set(bits: &[u8; GLYPH_HEIGHT], col: usize, row: usize) -> bool {
        row < GLYPH_HEIGHT && col < GLYPH_WIDTH && bits[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }

    /// Rendered width of `text` at `scale`.
    pub fn text_width(text: &str, scale: usize) -> usize {
        text.chars().count() * ADVANCE * scale
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_glyph_bits() {
            let l = glyph('l');
            assert!(is_set(&l, 0, 0));
            assert!(!is_set(&l, 2, 0));
            assert!(is_set(&l, 2, 4));
            assert!(!is_set(&l, 3, 0));
            assert_eq!(glyph(' '), [0; GLYPH_HEIGHT]);
            assert_eq!(glyph('~'), [0x7; GLYPH_HEIGHT]);
        }

        #[test]
        fn test_text_width() {
            assert_eq!(text_width("FPS:30", 2), 6 * 4 * 2);
            assert_eq!(text_width("", 3), 0);
        }
    }
}
