//! Saturation and hue-band color grade classification.
//!
//! Frames are converted to 8-bit HSV with the same ranges OpenCV uses
//! (hue 0-179, saturation 0-255). Low average saturation reads as black & white
//! or desaturated; otherwise the balance between warm and cool hue pixels
//! decides the grade.

use crate::classifiers::ColorGradeClassifier;
use crate::error::{CoreResult, classifier_error};
use crate::processing::labels::ColorGrade;
use crate::processing::sampler::VideoFrame;

/// Mean saturation below which a frame is graded black & white.
pub const BLACK_AND_WHITE_MAX_SATURATION: f64 = 10.0;

/// Mean saturation below which a frame is graded desaturated.
pub const DESATURATED_MAX_SATURATION: f64 = 25.0;

/// Half-open hue ranges counted as warm (reds and yellows).
pub const WARM_HUE_BANDS: [(u8, u8); 2] = [(0, 20), (160, 180)];

/// Half-open hue range counted as cool (blues and cyans).
pub const COOL_HUE_BAND: (u8, u8) = (90, 140);

/// Factor by which one side must outnumber the other to dominate.
pub const TONE_DOMINANCE_RATIO: f64 = 1.2;

/// Converts one RGB pixel to 8-bit (hue, saturation).
pub fn rgb_to_hue_saturation(r: u8, g: u8, b: u8) -> (u8, u8) {
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = v - min;

    let saturation = if v > 0.0 { (diff * 255.0 / v).round() } else { 0.0 };

    let hue = if diff == 0.0 {
        0.0
    } else {
        let degrees = if v == rf {
            60.0 * (gf - bf) / diff
        } else if v == gf {
            120.0 + 60.0 * (bf - rf) / diff
        } else {
            240.0 + 60.0 * (rf - gf) / diff
        };
        let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };
        (degrees / 2.0).round()
    };

    let hue = if hue >= 180.0 { hue - 180.0 } else { hue };
    (hue as u8, saturation as u8)
}

/// Grades rgb24 frames by saturation and hue balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsvColorGrader;

impl HsvColorGrader {
    pub fn new() -> Self {
        Self
    }

    /// Grades a raw rgb24 pixel buffer.
    pub fn grade_pixels(&self, rgb: &[u8]) -> ColorGrade {
        let pixel_count = rgb.len() / 3;
        if pixel_count == 0 {
            return ColorGrade::Unclassified;
        }

        let mut hue_bins = [0u64; 180];
        let mut saturation_sum = 0u64;
        for px in rgb.chunks_exact(3) {
            let (hue, saturation) = rgb_to_hue_saturation(px[0], px[1], px[2]);
            hue_bins[usize::from(hue)] += 1;
            saturation_sum += u64::from(saturation);
        }

        let average_saturation = saturation_sum as f64 / pixel_count as f64;
        log::trace!("Average saturation: {average_saturation:.2}");

        if average_saturation < DESATURATED_MAX_SATURATION {
            return if average_saturation < BLACK_AND_WHITE_MAX_SATURATION {
                ColorGrade::BlackAndWhite
            } else {
                ColorGrade::Desaturated
            };
        }

        let band_count = |(lo, hi): (u8, u8)| -> u64 {
            hue_bins[usize::from(lo)..usize::from(hi)].iter().sum()
        };
        let warm = WARM_HUE_BANDS.into_iter().map(band_count).sum::<u64>() as f64;
        let cool = band_count(COOL_HUE_BAND) as f64;
        log::trace!("Warm pixels: {warm}, cool pixels: {cool}");

        if warm > cool * TONE_DOMINANCE_RATIO {
            ColorGrade::WarmTones
        } else if cool > warm * TONE_DOMINANCE_RATIO {
            ColorGrade::CoolTones
        } else {
            ColorGrade::BalancedNatural
        }
    }
}

impl ColorGradeClassifier for HsvColorGrader {
    fn classify(&self, frame: &VideoFrame) -> CoreResult<ColorGrade> {
        let expected = frame.width as usize * frame.height as usize * 3;
        if frame.data.len() != expected {
            return Err(classifier_error(
                "color grader",
                frame.timestamp,
                format!(
                    "expected {} bytes of rgb24 for {}x{}, got {}",
                    expected,
                    frame.width,
                    frame.height,
                    frame.data.len()
                ),
            ));
        }
        Ok(self.grade_pixels(&frame.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(rgb: [u8; 3], pixels: usize) -> Vec<u8> {
        rgb.iter().copied().cycle().take(pixels * 3).collect()
    }

    #[test]
    fn test_hue_saturation_primaries() {
        assert_eq!(rgb_to_hue_saturation(255, 0, 0), (0, 255));
        assert_eq!(rgb_to_hue_saturation(0, 255, 0), (60, 255));
        assert_eq!(rgb_to_hue_saturation(0, 0, 255), (120, 255));
        assert_eq!(rgb_to_hue_saturation(128, 128, 128), (0, 0));
        assert_eq!(rgb_to_hue_saturation(0, 0, 0), (0, 0));
    }

    #[test]
    fn test_hue_wraps_below_180() {
        // Magenta-red just short of 360 degrees rounds onto the wrap point.
        let (hue, _) = rgb_to_hue_saturation(255, 0, 1);
        assert!(hue < 180);
    }

    #[test]
    fn test_grades() {
        let grader = HsvColorGrader::new();
        assert_eq!(grader.grade_pixels(&solid([128, 128, 128], 16)), ColorGrade::BlackAndWhite);
        assert_eq!(grader.grade_pixels(&solid([200, 190, 190], 16)), ColorGrade::Desaturated);
        assert_eq!(grader.grade_pixels(&solid([255, 0, 0], 16)), ColorGrade::WarmTones);
        assert_eq!(grader.grade_pixels(&solid([0, 0, 255], 16)), ColorGrade::CoolTones);
        assert_eq!(grader.grade_pixels(&solid([0, 255, 0], 16)), ColorGrade::BalancedNatural);
    }

    #[test]
    fn test_even_warm_and_cool_is_balanced() {
        let mut pixels = solid([255, 0, 0], 8);
        pixels.extend(solid([0, 0, 255], 8));
        assert_eq!(
            HsvColorGrader::new().grade_pixels(&pixels),
            ColorGrade::BalancedNatural
        );
    }

    #[test]
    fn test_empty_frame_is_unclassified() {
        assert_eq!(HsvColorGrader::new().grade_pixels(&[]), ColorGrade::Unclassified);
    }

    #[test]
    fn test_classify_rejects_mismatched_buffer() {
        let frame = VideoFrame {
            index: 0,
            timestamp: 0,
            width: 4,
            height: 4,
            data: vec![0; 10],
        };
        assert!(HsvColorGrader::new().classify(&frame).is_err());
    }
}
