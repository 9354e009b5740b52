// SPDX-License-Identifier: MPL-2.0
//! Video surface sizing.

/// Size of the video surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoSize {
    pub width: f32,
    pub height: f32,
}

impl VideoSize {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}

/// Fits a surface with the given aspect ratio (width / height) into the frame.
///
/// The surface takes the full frame height unless that would overflow the
/// frame width, in which case it takes the full width instead.
pub fn fit_video(frame_width: f32, frame_height: f32, aspect_ratio: f32) -> VideoSize {
    if frame_width <= 0.0 || frame_height <= 0.0 || aspect_ratio <= 0.0 || !aspect_ratio.is_finite()
    {
        return VideoSize::ZERO;
    }

    let mut height = frame_height;
    let mut width = height * aspect_ratio;
    if width > frame_width {
        width = frame_width;
        height = width / aspect_ratio;
    }
    VideoSize { width, height }
}

/// Fits the frame's own aspect ratio, i.e. fills the frame.
pub fn fill_frame(frame_width: f32, frame_height: f32) -> VideoSize {
    if frame_height <= 0.0 {
        return VideoSize::ZERO;
    }
    fit_video(frame_width, frame_height, frame_width / frame_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn wide_video_is_limited_by_width() {
        let size = fit_video(640.0, 480.0, 16.0 / 9.0);
        assert_abs_diff_eq!(size.width, 640.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.height, 360.0, epsilon = 1e-3);
    }

    #[test]
    fn tall_video_is_limited_by_height() {
        let size = fit_video(640.0, 360.0, 4.0 / 3.0);
        assert_abs_diff_eq!(size.height, 360.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(size.width, 480.0, epsilon = 1e-3);
    }

    #[test]
    fn fill_frame_keeps_frame_size() {
        let size = fill_frame(640.0, 360.0);
        assert_abs_diff_eq!(size.width, 640.0, epsilon = 1e-3);
        assert_abs_diff_eq!(size.height, 360.0, epsilon = 1e-3);
    }

    #[test]
    fn degenerate_frames_collapse_to_zero() {
        assert_eq!(fit_video(0.0, 360.0, 1.0), VideoSize::ZERO);
        assert_eq!(fit_video(640.0, 360.0, f32::NAN), VideoSize::ZERO);
        assert_eq!(fill_frame(640.0, 0.0), VideoSize::ZERO);
    }
}
