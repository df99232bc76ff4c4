use log::info;

use crate::annotation::annotatedrow::{
    AnnotatedCurve,
    AnnotatedRow
};
use crate::annotation::bandannotator::annotate_bands;
use crate::annotation::bandset::BandSet;
use crate::annotation::labelplacer::place_labels;
use crate::curve::controlpointsequence::ControlPointSequence;
use crate::curve::curvesampler::CurveSampler;
use crate::curve::densesequence::DenseSequence;
use crate::curve::invalidinput::CurveResult;
use crate::math::curve::bezier::catmullrom::catmull_rom_to_bezier;

// ─────────────────────────────────────────────────────────────────────────────
// CurvePipeline
// ─────────────────────────────────────────────────────────────────────────────
//
// 驗證 → Catmull-Rom/Bezier 分段 → 取樣 → 區間投影 + 標籤
//
// 取樣密度與區間列表在建構時驗證，控制點在 run() 一開始驗證，
// 任何 InvalidInput 都發生在建構曲線之前。

#[derive(Debug, Clone, PartialEq)]
pub struct CurvePipeline {
    sampler: CurveSampler,
    band_set: BandSet,
}

impl CurvePipeline {
    pub fn new(samples_per_segment: usize, band_set: BandSet) -> CurveResult<CurvePipeline> {
        let sampler = CurveSampler::new(samples_per_segment)?;
        Ok(CurvePipeline { sampler, band_set })
    }

    pub fn sampler(&self) -> &CurveSampler {
        &self.sampler
    }

    pub fn band_set(&self) -> &BandSet {
        &self.band_set
    }

    /// 只產生平滑曲線，不做標註
    pub fn dense_curve(&self, control_points: &ControlPointSequence) -> DenseSequence {
        let segments = catmull_rom_to_bezier(control_points.points());
        self.sampler.sample(&segments)
    }

    pub fn run(&self, raw_points: &[(f64, f64)]) -> CurveResult<AnnotatedCurve> {
        let control_points = ControlPointSequence::new(raw_points)?;
        Ok(self.annotate(&control_points))
    }

    pub fn annotate(&self, control_points: &ControlPointSequence) -> AnnotatedCurve {
        let dense = self.dense_curve(control_points);
        let band_values = annotate_bands(&dense, &self.band_set);
        let labels = place_labels(&dense, control_points.points());

        let rows: Vec<AnnotatedRow> = dense
            .iter()
            .zip(band_values)
            .zip(labels)
            .map(|((sample, per_band_y), label)| AnnotatedRow::new(sample.x(), sample.y(), per_band_y, label))
            .collect();

        info!(
            "annotated curve through {} control points: {} rows across {} bands",
            control_points.len(),
            rows.len(),
            self.band_set.len()
        );
        AnnotatedCurve::new(self.band_set.labels(), rows)
    }
}
