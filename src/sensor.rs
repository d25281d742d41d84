pub mod webcam {

    use image::{RgbImage, imageops::FilterType};
    use log::info;
    use nokhwa::pixel_format::RgbFormat;
    use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
    use nokhwa::{Camera, NokhwaError};

    pub fn setup(index: u32) -> Result<Camera, NokhwaError> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        info!("Opening camera {}", index);

        Camera::new(CameraIndex::Index(index), requested)
    }

    pub fn capture_and_decode_frame(camera: &mut Camera) -> Result<RgbImage, NokhwaError> {
        let frame = camera.frame()?;
        frame.decode_image::<RgbFormat>()
    }

    /// Resize to the processing size and optionally mirror for a selfie view.
    pub fn prepare_frame(frame: &RgbImage, width: u32, height: u32, mirror: bool) -> RgbImage {
        let resized = image::imageops::resize(frame, width, height, FilterType::Nearest);
        if mirror {
            image::imageops::flip_horizontal(&resized)
        } else {
            resized
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use image::Rgb;

        #[test]
        fn test_prepare_frame_mirrors() {
            let mut frame = RgbImage::new(4, 2);
            frame.put_pixel(0, 0, Rgb([255, 0, 0]));

            let out = prepare_frame(&frame, 4, 2, true);
            assert_eq!(out.dimensions(), (4, 2));
            assert_eq!(out.get_pixel(3, 0), &Rgb([255, 0, 0]));

            let out = prepare_frame(&frame, 8, 4, false);
            assert_eq!(out.dimensions(), (8, 4));
            assert_eq!(out.get_pixel(0, 0), &Rgb([255, 0, 0]));
        }
    }
}
