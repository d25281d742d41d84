pub mod frame_rate {
    use std::collections::VecDeque;
    use std::time::{Duration, Instant};

    /// Most decimal places a rate is reported with.
    pub const MAX_PRECISION: u32 = 6;

    /// Rolling average of instantaneous frame rates.
    pub struct FpsSmoother {
        capacity: usize,
        precision: u32,
        samples: VecDeque<f64>,
        last_tick: Instant,
    }

    impl FpsSmoother {
        /// Average over the last `capacity` samples, rounded to `precision` decimals
        /// (at most [`MAX_PRECISION`]).
        pub fn new(capacity: usize, precision: u32) -> Self {
            let capacity = capacity.max(1);
            Self {
                capacity,
                precision: precision.min(MAX_PRECISION),
                samples: VecDeque::with_capacity(capacity),
                last_tick: Instant::now(),
            }
        }

        /// Record the time since the previous tick (or construction).
        pub fn tick(&mut self) -> f64 {
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_tick);
            self.last_tick = now;
            self.record(elapsed)
        }

        /// Record one frame interval. A zero interval leaves the window untouched.
        pub fn record(&mut self, elapsed: Duration) -> f64 {
            let secs = elapsed.as_secs_f64();
            if secs <= 0.0 {
                return self.average();
            }
            self.push(1.0 / secs)
        }

        /// Add an already computed rate sample.
        pub fn push(&mut self, rate: f64) -> f64 {
            if self.samples.len() >= self.capacity {
                self.samples.pop_front();
            }
            self.samples.push_back(rate);
            self.average()
        }

        pub fn average(&self) -> f64 {
            if self.samples.is_empty() {
                return 0.0;
            }
            let mean = self.samples.iter().sum::<f64>() / self.samples.len() as f64;
            let factor = 10f64.powi(self.precision as i32);
            (mean * factor).round() / factor
        }

        pub fn len(&self) -> usize {
            self.samples.len()
        }

        pub fn is_empty(&self) -> bool {
            self.samples.is_empty()
        }

        pub fn capacity(&self) -> usize {
            self.capacity
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_steady_thirty() {
            let mut fps = FpsSmoother::new(10, 0);
            let mut last = 0.0;
            for _ in 0..10 {
                last = fps.record(Duration::from_secs_f64(1.0 / 30.0));
            }
            assert_eq!(last, 30.0);
            assert_eq!(fps.len(), 10);
        }

        #[test]
        fn test_window_evicts_oldest() {
            let mut fps = FpsSmoother::new(3, 0);
            fps.push(10.0);
            fps.push(20.0);
            fps.push(30.0);
            assert_eq!(fps.push(40.0), 30.0);
            assert_eq!(fps.len(), 3);
        }

        #[test]
        fn test_zero_elapsed_is_absorbed() {
            let mut fps = FpsSmoother::new(4, 0);
            assert_eq!(fps.record(Duration::ZERO), 0.0);
            assert!(fps.is_empty());
            fps.record(Duration::from_millis(50));
            assert_eq!(fps.record(Duration::ZERO), 20.0);
            assert_eq!(fps.len(), 1);
        }

        #[test]
        fn test_precision() {
            let mut fps = FpsSmoother::new(2, 2);
            fps.push(10.0);
            assert_eq!(fps.push(10.125), 10.06);
        }

        #[test]
        fn test_precision_is_capped() {
            let mut fps = FpsSmoother::new(1, u32::MAX);
            assert_eq!(fps.push(25.0), 25.0);
            assert_eq!(fps.push(1.0 / 3.0), 0.333333);
        }

        #[test]
        fn test_tick_produces_sample() {
            let mut fps = FpsSmoother::new(16, 0);
            std::thread::sleep(Duration::from_millis(5));
            let rate = fps.tick();
            assert!(rate > 0.0);
            assert_eq!(fps.capacity(), 16);
        }
    }
}
