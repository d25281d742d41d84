pub mod geometry {
    //! Geometry for one detected hand: projecting normalized landmarks into
    //! the frame, boxing them, and reducing them to a classifier feature vector.

    use crate::error::{GestureError, Result};

    /// Landmarks reported per hand, in anatomical order.
    pub const LANDMARK_COUNT: usize = 21;

    /// Flattened (x, y) width of a feature vector.
    pub const FEATURE_LEN: usize = LANDMARK_COUNT * 2;

    /// Index of the wrist landmark, the origin of every feature vector.
    pub const WRIST: usize = 0;

    /// Landmark pairs joined by the hand skeleton overlay.
    pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (0, 5),
        (5, 6),
        (6, 7),
        (7, 8),
        (5, 9),
        (9, 10),
        (10, 11),
        (11, 12),
        (9, 13),
        (13, 14),
        (14, 15),
        (15, 16),
        (13, 17),
        (0, 17),
        (17, 18),
        (18, 19),
        (19, 20),
    ];

    /// A detector keypoint in normalized image coordinates.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Landmark {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }

    impl Landmark {
        pub fn new(x: f32, y: f32, z: f32) -> Self {
            Self { x, y, z }
        }
    }

    /// A landmark projected onto the pixel grid.
    ///
    /// Signed because negative detector output is passed through unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PixelPoint {
        pub x: i32,
        pub y: i32,
    }

    impl PixelPoint {
        pub fn new(x: i32, y: i32) -> Self {
            Self { x, y }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BoundingBox {
        pub xmin: i32,
        pub ymin: i32,
        pub xmax: i32,
        pub ymax: i32,
    }

    impl BoundingBox {
        pub fn width(&self) -> i32 {
            self.xmax - self.xmin
        }

        pub fn height(&self) -> i32 {
            self.ymax - self.ymin
        }
    }

    /// Wrist-relative, scale-normalized landmark coordinates.
    ///
    /// Layout is `[dx0, dy0, dx1, dy1, ..., dx20, dy20]`. Elements 0 and 1 are
    /// always zero and every element lies in `[-1.0, 1.0]`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct FeatureVector([f32; FEATURE_LEN]);

    impl FeatureVector {
        pub fn as_slice(&self) -> &[f32] {
            &self.0
        }

        pub fn to_vec(&self) -> Vec<f32> {
            self.0.to_vec()
        }

        /// True when every landmark coincided with the wrist.
        pub fn is_degenerate(&self) -> bool {
            self.0.iter().all(|v| *v == 0.0)
        }
    }

    /// Map normalized landmarks to pixel coordinates of a `width` x `height` frame.
    ///
    /// Coordinates are floored and clamped to `width - 1` / `height - 1` on the
    /// high side only; negative values pass through.
    pub fn project(landmarks: &[Landmark], width: u32, height: u32) -> Vec<PixelPoint> {
        let (w, h) = (width as f64, height as f64);
        let (max_x, max_y) = (width as i32 - 1, height as i32 - 1);

        landmarks
            .iter()
            .map(|lm| {
                let px = ((lm.x as f64 * w).floor() as i32).min(max_x);
                let py = ((lm.y as f64 * h).floor() as i32).min(max_y);
                PixelPoint::new(px, py)
            })
            .collect()
    }

    /// Smallest axis-aligned box enclosing `points`, or `None` when empty.
    pub fn bounding_box(points: &[PixelPoint]) -> Option<BoundingBox> {
        let first = points.first()?;
        let seed = BoundingBox {
            xmin: first.x,
            ymin: first.y,
            xmax: first.x,
            ymax: first.y,
        };

        Some(points.iter().skip(1).fold(seed, |b, p| BoundingBox {
            xmin: b.xmin.min(p.x),
            ymin: b.ymin.min(p.y),
            xmax: b.xmax.max(p.x),
            ymax: b.ymax.max(p.y),
        }))
    }

    /// Reduce a hand's pixel points to a translation- and scale-invariant vector.
    ///
    /// When every point sits on the wrist there is no scale to divide by and
    /// the result is the all-zero vector.
    pub fn normalize(points: &[PixelPoint]) -> Result<FeatureVector> {
        if points.len() != LANDMARK_COUNT {
            return Err(GestureError::MalformedInput {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }

        // Relative to wrist, flattened
        let base = points[WRIST];
        let mut values = [0.0f32; FEATURE_LEN];
        for (i, p) in points.iter().enumerate() {
            values[i * 2] = (p.x - base.x) as f32;
            values[i * 2 + 1] = (p.y - base.y) as f32;
        }

        let max_abs = values.iter().fold(0.0f32, |m, v| m.max(v.abs()));
        if max_abs == 0.0 {
            return Ok(FeatureVector(values));
        }

        for v in values.iter_mut() {
            *v /= max_abs;
        }

        Ok(FeatureVector(values))
    }

}
