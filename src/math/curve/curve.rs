use crate::math::curve::point2d::Point2D;

/// 以參數 t ∈ [0, 1] 描述的平面曲線
pub trait ParametricCurve {
    fn point_at(&self, t: f64) -> Point2D;

    fn start_point(&self) -> Point2D {
        self.point_at(0.0)
    }

    fn end_point(&self) -> Point2D {
        self.point_at(1.0)
    }
}
