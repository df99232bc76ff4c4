use serde::{
    Deserialize,
    Serialize
};

/// x 軸上帶標籤的子區間
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    lower: f64,
    upper: f64,
    label: String,
}

impl Band {
    pub fn new(lower: f64, upper: f64, label: impl Into<String>) -> Band {
        Band { lower, upper, label: label.into() }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 區間成員判定，兩端邊界都向下平移 `tolerance`：
    ///
    ///   非末段：lower - tol ≤ x < upper - tol
    ///   末段：  lower - tol ≤ x ≤ upper + tol
    ///
    /// 相鄰區間共用同一個平移後的邊界，因此不重疊也不留縫。
    /// 落在邊界下方 tol 以內的取樣點（樣條求值的浮點誤差）歸入上側區間。
    pub fn contains(&self, x: f64, is_last: bool, tolerance: f64) -> bool {
        if x < self.lower - tolerance {
            return false;
        }
        if is_last {
            x <= self.upper + tolerance
        } else {
            x < self.upper - tolerance
        }
    }
}

/// 區間標籤，例如 "2–3"；整數邊界不帶小數點
pub fn range_label(lower: f64, upper: f64) -> String {
    format!("{}–{}", format_edge(lower), format_edge(upper))
}

fn format_edge(edge: f64) -> String {
    if edge.fract() == 0.0 && edge.abs() < 1e15 {
        format!("{}", edge as i64)
    } else {
        format!("{}", edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_for_inner_bands() {
        let band = Band::new(3.0, 4.0, "3–4");
        assert!(band.contains(3.0, false, 0.0));
        assert!(band.contains(3.999, false, 0.0));
        assert!(!band.contains(4.0, false, 0.0));
        assert!(!band.contains(2.999, false, 0.0));
    }

    #[test]
    fn closed_for_last_band() {
        let band = Band::new(6.0, 7.0, "6–7");
        assert!(band.contains(7.0, true, 0.0));
        assert!(!band.contains(7.0, false, 0.0));
        assert!(!band.contains(7.1, true, 1e-9));
    }

    #[test]
    fn drift_below_boundary_goes_to_upper_band() {
        let lower_band = Band::new(3.0, 4.0, "3–4");
        let upper_band = Band::new(4.0, 5.0, "4–5");
        let drifted = 4.0 - 1e-12;
        assert!(!lower_band.contains(drifted, false, 1e-9));
        assert!(upper_band.contains(drifted, false, 1e-9));
    }

    #[test]
    fn labels_print_whole_edges_as_integers() {
        assert_eq!(range_label(2.0, 3.0), "2–3");
        assert_eq!(range_label(2.5, 3.0), "2.5–3");
        assert_eq!(range_label(-1.0, 0.25), "-1–0.25");
    }
}
