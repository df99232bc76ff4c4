use std::ops::{Add, Div, Sub};

use nalgebra::{
    Point2,
    Vector2
};

/// 平面上的點，控制點與取樣點共用此型別。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    coords: Point2<f64>
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { coords: Point2::new(x, y) }
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    pub fn is_finite(&self) -> bool {
        self.coords.x.is_finite() && self.coords.y.is_finite()
    }

    /// 以 Bernstein 權重線性組合四個點：Σ w_k·p_k
    pub fn weighted_sum(points: [&Point2D; 4], weights: [f64; 4]) -> Point2D {
        let coords = points
            .iter()
            .zip(weights.iter())
            .fold(Vector2::<f64>::zeros(), |acc, (pt, &w)| acc + pt.coords.coords * w);
        Point2D { coords: Point2::from(coords) }
    }
}

impl From<Point2<f64>> for Point2D {
    fn from(coords: Point2<f64>) -> Self {
        Point2D { coords }
    }
}

/// 兩點相減得位移向量，仍以 `Point2D` 表示（x、y 分量）
impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::from(Point2::from(self.coords - rhs.coords))
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::from(self.coords + rhs.coords.coords)
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;

    fn div(self, rhs: f64) -> Point2D {
        Point2D::from(self.coords / rhs)
    }
}

pub type ControlPoint = Point2D;

pub type DenseSample = Point2D;
