use log::debug;

use crate::curve::densesequence::DenseSequence;
use crate::curve::invalidinput::{
    CurveResult,
    InvalidInput
};
use crate::math::curve::curve::ParametricCurve;

/// 每段少於 4 個取樣點時曲線外觀會斷裂
pub const MIN_SAMPLES_PER_SEGMENT: usize = 4;

/// 取樣密度上限，限制輸出列數與記憶體用量
pub const MAX_SAMPLES_PER_SEGMENT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSampler {
    samples_per_segment: usize,
}

impl CurveSampler {
    pub fn new(samples_per_segment: usize) -> CurveResult<CurveSampler> {
        if samples_per_segment < MIN_SAMPLES_PER_SEGMENT {
            return Err(InvalidInput::SampleDensityTooLow {
                minimum: MIN_SAMPLES_PER_SEGMENT,
                actual: samples_per_segment,
            });
        }
        if samples_per_segment > MAX_SAMPLES_PER_SEGMENT {
            return Err(InvalidInput::SampleDensityTooHigh {
                maximum: MAX_SAMPLES_PER_SEGMENT,
                actual: samples_per_segment,
            });
        }
        Ok(CurveSampler { samples_per_segment })
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    /// 取樣結果的長度：1 + segments·(samples_per_segment - 1)
    pub fn expected_len(&self, segment_count: usize) -> usize {
        if segment_count == 0 {
            0
        } else {
            segment_count
                .saturating_mul(self.samples_per_segment - 1)
                .saturating_add(1)
        }
    }

    /// t_i = i / (samples_per_segment - 1)，含 0 與 1
    fn parameter(&self, i: usize) -> f64 {
        i as f64 / (self.samples_per_segment - 1) as f64
    }

    /// 依序取樣各段並串接；第二段起略過 t = 0（與前一段 t = 1 重複）。
    pub fn sample<C: ParametricCurve>(&self, segments: &[C]) -> DenseSequence {
        let mut samples = Vec::with_capacity(self.expected_len(segments.len()));
        for (index, segment) in segments.iter().enumerate() {
            let first = if index == 0 { 0 } else { 1 };
            samples.extend((first..self.samples_per_segment).map(|i| segment.point_at(self.parameter(i))));
        }
        debug!(
            "sampled {} segments at {} points each into {} samples",
            segments.len(),
            self.samples_per_segment,
            samples.len()
        );
        DenseSequence::new(samples)
    }
}
