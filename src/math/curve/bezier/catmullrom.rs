use log::debug;

use crate::math::curve::bezier::beziersegment::BezierSegment;
use crate::math::curve::point2d::Point2D;

// ─────────────────────────────────────────────
// Catmull-Rom → Bezier
// ─────────────────────────────────────────────
//
// 均勻參數、tension = 0 的開放 Catmull-Rom 曲線，逐段轉為三次 Bezier。
//
// 端點外推幽靈點（鏡射首末位移向量）：
//   P[-1] = P[0]   - (P[1]   - P[0])
//   P[n]  = P[n-1] + (P[n-1] - P[n-2])
//
// 對每個視窗 (P[i-1], P[i], P[i+1], P[i+2])：
//   C1 = P[i]   + (P[i+1] - P[i-1]) / 6
//   C2 = P[i+1] - (P[i+2] - P[i])   / 6
//
// 相鄰兩段在 P[i] 的切線皆為 (P[i+1] - P[i-1]) / 2，故內部節點 C¹ 連續。

/// 將已依 x 排序的點列轉為 n-1 段 Bezier。少於兩點時回傳空列表。
pub fn catmull_rom_to_bezier(points: &[Point2D]) -> Vec<BezierSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let virtual_first = points[0] - (points[1] - points[0]);
    let virtual_last = points[n - 1] + (points[n - 1] - points[n - 2]);

    let mut extended = Vec::with_capacity(n + 2);
    extended.push(virtual_first);
    extended.extend_from_slice(points);
    extended.push(virtual_last);

    let segments: Vec<BezierSegment> = extended
        .windows(4)
        .map(|w| {
            let (p0, p1, p2, p3) = (w[0], w[1], w[2], w[3]);
            let c1 = p1 + (p2 - p0) / 6.0;
            let c2 = p2 - (p3 - p1) / 6.0;
            BezierSegment::new(p1, c1, c2, p2)
        })
        .collect();

    debug!("built {} bezier segments from {} control points", segments.len(), n);
    segments
}
