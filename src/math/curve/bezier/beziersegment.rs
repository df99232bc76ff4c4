use crate::math::curve::curve::ParametricCurve;
use crate::math::curve::point2d::Point2D;

// ─────────────────────────────────────────────
// BezierSegment
// ─────────────────────────────────────────────
//
// 三次 Bezier 曲線段，以 Bernstein 基底求值：
//
//   B(t) = (1-t)^3·P0 + 3(1-t)^2·t·C1 + 3(1-t)·t^2·C2 + t^3·P1
//
// t = 0 與 t = 1 時僅一個權重非零，端點可精確重現。

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    start: Point2D,
    control1: Point2D,
    control2: Point2D,
    end: Point2D,
}

impl BezierSegment {
    pub fn new(start: Point2D, control1: Point2D, control2: Point2D, end: Point2D) -> BezierSegment {
        BezierSegment { start, control1, control2, end }
    }

    pub fn start(&self) -> &Point2D {
        &self.start
    }

    pub fn control1(&self) -> &Point2D {
        &self.control1
    }

    pub fn control2(&self) -> &Point2D {
        &self.control2
    }

    pub fn end(&self) -> &Point2D {
        &self.end
    }

    /// B'(0) = 3·(C1 - P0)
    pub fn start_tangent(&self) -> Point2D {
        let d = self.control1 - self.start;
        Point2D::new(3.0 * d.x(), 3.0 * d.y())
    }

    /// B'(1) = 3·(P1 - C2)
    pub fn end_tangent(&self) -> Point2D {
        let d = self.end - self.control2;
        Point2D::new(3.0 * d.x(), 3.0 * d.y())
    }

    fn bernstein_weights(t: f64) -> [f64; 4] {
        let s = 1.0 - t;
        [
            s * s * s,
            3.0 * s * s * t,
            3.0 * s * t * t,
            t * t * t,
        ]
    }
}

impl ParametricCurve for BezierSegment {
    fn point_at(&self, t: f64) -> Point2D {
        Point2D::weighted_sum(
            [&self.start, &self.control1, &self.control2, &self.end],
            Self::bernstein_weights(t),
        )
    }
}
