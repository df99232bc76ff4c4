use crate::curve::invalidinput::{
    CurveResult,
    InvalidInput
};
use crate::math::curve::point2d::ControlPoint;

pub const MIN_CONTROL_POINTS: usize = 2;

/// 依 x 嚴格遞增排序的控制點列。
///
/// 曲線順序只由 x 決定，輸入順序不具意義。
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSequence {
    points: Vec<ControlPoint>,
}

impl ControlPointSequence {
    /// 驗證並排序原始 (x, y) 數對
    pub fn new(raw_points: &[(f64, f64)]) -> CurveResult<ControlPointSequence> {
        let points = raw_points
            .iter()
            .map(|&(x, y)| ControlPoint::new(x, y))
            .collect();
        Self::from_points(points)
    }

    pub fn from_points(mut points: Vec<ControlPoint>) -> CurveResult<ControlPointSequence> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(InvalidInput::TooFewPoints {
                required: MIN_CONTROL_POINTS,
                actual: points.len(),
            });
        }

        if let Some((index, pt)) = points.iter().enumerate().find(|(_, pt)| !pt.is_finite()) {
            return Err(InvalidInput::NonFiniteCoordinate { index, x: pt.x(), y: pt.y() });
        }

        points.sort_by(|lhs, rhs| lhs.x().total_cmp(&rhs.x()));

        if let Some(pair) = points.windows(2).find(|w| w[0].x() == w[1].x()) {
            return Err(InvalidInput::DuplicateX { x: pair[0].x() });
        }

        Ok(ControlPointSequence { points })
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_x(&self) -> f64 {
        self.points[0].x()
    }

    pub fn max_x(&self) -> f64 {
        self.points[self.points.len() - 1].x()
    }
}
