pub mod draw {
    //! Drawing helpers for the `0x00RRGGBB` window buffer.

    use crate::geometry::{BoundingBox, HAND_CONNECTIONS, PixelPoint};
    use crate::gesture_pipeline::HandGesture;
    use crate::glyphs::{ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph, is_set};

    pub const BOX_COLOR: u32 = 0x000000;
    pub const TEXT_COLOR: u32 = 0xFFFFFF;
    pub const BONE_COLOR: u32 = 0xFFFFFF;
    pub const DOT_COLOR: u32 = 0xFF0000;

    /// Height of the caption banner above the box.
    pub const BANNER_HEIGHT: i32 = 22;

    const CAPTION_SCALE: usize = 3;
    const FPS_SCALE: usize = 4;

    /// A `width` x `height` view over a window pixel buffer.
    pub struct Canvas<'a> {
        buffer: &'a mut [u32],
        width: usize,
        height: usize,
    }

    impl<'a> Canvas<'a> {
        pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
            Self {
                buffer,
                width,
                height,
            }
        }

        /// Copy packed `[R, G, B, ...]` bytes into the buffer.
        pub fn blit_rgb(&mut self, raw: &[u8]) {
            for (dst, chunk) in self.buffer.iter_mut().zip(raw.chunks_exact(3)) {
                let r = chunk[0] as u32;
                let g = chunk[1] as u32;
                let b = chunk[2] as u32;
                *dst = (r << 16) | (g << 8) | b;
            }
        }

        pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
            self.index(x, y).map(|i| self.buffer[i])
        }

        fn index(&self, x: i32, y: i32) -> Option<usize> {
            if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
                return None;
            }
            Some(y as usize * self.width + x as usize)
        }

        fn put(&mut self, x: i32, y: i32, color: u32) {
            if let Some(i) = self.index(x, y) {
                self.buffer[i] = color;
            }
        }

        pub fn rect(&mut self, b: &BoundingBox, color: u32) {
            for x in b.xmin..=b.xmax {
                self.put(x, b.ymin, color);
                self.put(x, b.ymax, color);
            }
            for y in b.ymin..=b.ymax {
                self.put(b.xmin, y, color);
                self.put(b.xmax, y, color);
            }
        }

        pub fn fill_rect(&mut self, b: &BoundingBox, color: u32) {
            let xmin = b.xmin.max(0);
            let ymin = b.ymin.max(0);
            let xmax = b.xmax.min(self.width as i32 - 1);
            let ymax = b.ymax.min(self.height as i32 - 1);
            for y in ymin..=ymax {
                for x in xmin..=xmax {
                    self.put(x, y, color);
                }
            }
        }

        pub fn dot(&mut self, p: PixelPoint, radius: i32, color: u32) {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    self.put(p.x + dx, p.y + dy, color);
                }
            }
        }

        /// Bresenham line from `a` to `b`, both ends included.
        pub fn line(&mut self, a: PixelPoint, b: PixelPoint, color: u32) {
            let (mut x, mut y) = (a.x, a.y);
            let dx = (b.x - a.x).abs();
            let dy = -(b.y - a.y).abs();
            let sx = if a.x < b.x { 1 } else { -1 };
            let sy = if a.y < b.y { 1 } else { -1 };
            let mut err = dx + dy;

            loop {
                self.put(x, y, color);
                if x == b.x && y == b.y {
                    break;
                }
                let e2 = 2 * err;
                if e2 >= dy {
                    err += dy;
                    x += sx;
                }
                if e2 <= dx {
                    err += dx;
                    y += sy;
                }
            }
        }

        /// Draw `text` with its top-left corner at (`x`, `y`).
        pub fn text(&mut self, x: i32, y: i32, text: &str, color: u32, scale: usize) {
            let s = scale as i32;
            for (i, c) in text.chars().enumerate() {
                let bits = glyph(c);
                let cx = x + (i * ADVANCE) as i32 * s;
                for row in 0..GLYPH_HEIGHT {
                    for col in 0..GLYPH_WIDTH {
                        if !is_set(&bits, col, row) {
                            continue;
                        }
                        let px = cx + col as i32 * s;
                        let py = y + row as i32 * s;
                        for oy in 0..s {
                            for ox in 0..s {
                                self.put(px + ox, py + oy, color);
                            }
                        }
                    }
                }
            }
        }

        /// `FPS:n` in the top-left corner, outlined for contrast.
        pub fn fps(&mut self, fps: f64) {
            let label = format!("FPS:{}", fps);
            for (ox, oy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                self.text(10 + ox, 10 + oy, &label, BOX_COLOR, FPS_SCALE);
            }
            self.text(10, 10, &label, TEXT_COLOR, FPS_SCALE);
        }

        /// Skeleton, box, caption banner and landmark dots for one decided hand.
        pub fn hand(&mut self, gesture: &HandGesture) {
            let points = &gesture.points;
            for &(a, b) in HAND_CONNECTIONS.iter() {
                if let (Some(&pa), Some(&pb)) = (points.get(a), points.get(b)) {
                    self.line(pa, pb, BONE_COLOR);
                }
            }
            for p in points {
                self.dot(*p, 2, DOT_COLOR);
            }

            let b = gesture.bounding_box;
            self.rect(&b, BOX_COLOR);
            self.fill_rect(
                &BoundingBox {
                    xmin: b.xmin,
                    ymin: b.ymin - BANNER_HEIGHT,
                    xmax: b.xmax,
                    ymax: b.ymin,
                },
                BOX_COLOR,
            );

            let text_height = (GLYPH_HEIGHT * CAPTION_SCALE) as i32;
            self.text(
                b.xmin + 5,
                b.ymin - 4 - text_height,
                &gesture.caption(),
                TEXT_COLOR,
                CAPTION_SCALE,
            );
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::geometry::{LANDMARK_COUNT, normalize};
        use crate::glyphs::text_width;
        use crate::hand_landmarker::Handedness;

        fn gesture(b: BoundingBox, points: Vec<PixelPoint>) -> HandGesture {
            let features = normalize(&vec![PixelPoint::new(0, 0); LANDMARK_COUNT]).unwrap();
            HandGesture {
                bounding_box: b,
                label: "Open".to_string(),
                class_index: 0,
                handedness: Handedness::Right,
                features,
                points,
            }
        }

        fn count(canvas: &Canvas, area: &BoundingBox, color: u32) -> usize {
            let mut n = 0;
            for y in area.ymin..=area.ymax {
                for x in area.xmin..=area.xmax {
                    if canvas.pixel(x, y) == Some(color) {
                        n += 1;
                    }
                }
            }
            n
        }

        #[test]
        fn test_blit_rgb() {
            let mut buf = vec![0u32; 2];
            Canvas::new(&mut buf, 2, 1).blit_rgb(&[0xFF, 0x00, 0x10, 0x01, 0x02, 0x03]);
            assert_eq!(buf, vec![0xFF0010, 0x010203]);
        }

        #[test]
        fn test_rect_outline() {
            let mut buf = vec![0xABCDEFu32; 100];
            let mut canvas = Canvas::new(&mut buf, 10, 10);
            let b = BoundingBox {
                xmin: 2,
                ymin: 2,
                xmax: 5,
                ymax: 6,
            };
            canvas.rect(&b, 0x00FF00);
            assert_eq!(canvas.pixel(2, 4), Some(0x00FF00));
            assert_eq!(canvas.pixel(5, 6), Some(0x00FF00));
            assert_eq!(canvas.pixel(3, 4), Some(0xABCDEF));
        }

        #[test]
        fn test_clips_at_edges() {
            let mut buf = vec![0u32; 16];
            let mut canvas = Canvas::new(&mut buf, 4, 4);
            canvas.dot(PixelPoint::new(0, 0), 3, 1);
            canvas.fill_rect(
                &BoundingBox {
                    xmin: -5,
                    ymin: -30,
                    xmax: 10,
                    ymax: 0,
                },
                2,
            );
            assert_eq!(canvas.pixel(3, 3), Some(1));
            assert_eq!(canvas.pixel(3, 0), Some(2));
            assert_eq!(canvas.pixel(4, 0), None);
            canvas.text(-50, -50, "OK", 3, 2);
        }

        #[test]
        fn test_line_endpoints() {
            let mut buf = vec![0u32; 100];
            let mut canvas = Canvas::new(&mut buf, 10, 10);
            canvas.line(PixelPoint::new(1, 1), PixelPoint::new(8, 4), 5);
            assert_eq!(canvas.pixel(1, 1), Some(5));
            assert_eq!(canvas.pixel(8, 4), Some(5));
            canvas.line(PixelPoint::new(3, 9), PixelPoint::new(3, 9), 6);
            assert_eq!(canvas.pixel(3, 9), Some(6));
        }

        #[test]
        fn test_banner_carries_caption() {
            let mut buf = vec![0x808080u32; 200 * 120];
            let mut canvas = Canvas::new(&mut buf, 200, 120);
            let b = BoundingBox {
                xmin: 20,
                ymin: 60,
                xmax: 180,
                ymax: 110,
            };
            canvas.hand(&gesture(b, Vec::new()));

            let banner = BoundingBox {
                xmin: b.xmin,
                ymin: b.ymin - BANNER_HEIGHT,
                xmax: b.xmax,
                ymax: b.ymin,
            };
            assert!(count(&canvas, &banner, TEXT_COLOR) > 0);
            assert!(count(&canvas, &banner, BOX_COLOR) > 0);
            // "Right:Open" fits inside the banner
            let caption_end = b.xmin + 5 + text_width("Right:Open", CAPTION_SCALE) as i32;
            assert!(caption_end < b.xmax);
        }

        #[test]
        fn test_hand_draws_skeleton() {
            let mut buf = vec![0u32; 100 * 100];
            let mut canvas = Canvas::new(&mut buf, 100, 100);
            let mut points = vec![PixelPoint::new(10, 10); LANDMARK_COUNT];
            points[1] = PixelPoint::new(90, 10);
            let b = BoundingBox {
                xmin: 10,
                ymin: 60,
                xmax: 90,
                ymax: 90,
            };
            canvas.hand(&gesture(b, points));
            // Midway along the wrist -> thumb bone
            assert_eq!(canvas.pixel(50, 10), Some(BONE_COLOR));
            assert_eq!(canvas.pixel(90, 10), Some(DOT_COLOR));
        }

        #[test]
        fn test_fps_label() {
            let mut buf = vec![0x123456u32; 200 * 60];
            let mut canvas = Canvas::new(&mut buf, 200, 60);
            canvas.fps(30.0);
            let area = BoundingBox {
                xmin: 10,
                ymin: 10,
                xmax: 10 + text_width("FPS:30", FPS_SCALE) as i32,
                ymax: 10 + (GLYPH_HEIGHT * FPS_SCALE) as i32,
            };
            assert!(count(&canvas, &area, TEXT_COLOR) > 0);
            assert_eq!(canvas.pixel(150, 50), Some(0x123456));
        }
    }
}
