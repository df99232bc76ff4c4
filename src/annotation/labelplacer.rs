use log::warn;

use crate::curve::densesequence::DenseSequence;
use crate::math::curve::point2d::ControlPoint;
use crate::math::round::percent_label;

/// 每個控制點在 x 最近的取樣點上標註百分比標籤，其餘取樣點為 None。
///
/// 兩個控制點落在同一取樣點時保留最後寫入的標籤。
pub fn place_labels(dense: &DenseSequence, control_points: &[ControlPoint]) -> Vec<Option<String>> {
    let mut labels: Vec<Option<String>> = vec![None; dense.len()];
    for pt in control_points {
        let Some(index) = dense.nearest_index(pt.x()) else {
            continue;
        };
        let label = percent_label(pt.y());
        if let Some(previous) = labels[index].replace(label) {
            warn!(
                "control point ({}, {}) overwrites label '{}' at sample #{}; points are closer than the sampling resolution",
                pt.x(),
                pt.y(),
                previous,
                index
            );
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::curve::point2d::DenseSample;

    fn dense(xs: &[f64]) -> DenseSequence {
        DenseSequence::new(xs.iter().map(|&x| DenseSample::new(x, 0.0)).collect())
    }

    #[test]
    fn labels_nearest_sample() {
        let seq = dense(&[0.0, 0.5, 1.0, 1.5, 2.0]);
        let pts = [ControlPoint::new(0.1, 0.25), ControlPoint::new(1.6, 0.75)];
        let labels = place_labels(&seq, &pts);
        assert_eq!(
            labels,
            vec![Some("25%".to_owned()), None, None, Some("75%".to_owned()), None]
        );
    }

    #[test]
    fn ties_go_to_earliest_sample() {
        let seq = dense(&[0.0, 1.0]);
        let labels = place_labels(&seq, &[ControlPoint::new(0.5, 0.1)]);
        assert_eq!(labels, vec![Some("10%".to_owned()), None]);
    }

    #[test]
    fn collision_keeps_last_label() {
        let seq = dense(&[0.0, 1.0, 2.0]);
        let pts = [ControlPoint::new(0.95, 0.3), ControlPoint::new(1.05, 0.4)];
        let labels = place_labels(&seq, &pts);
        assert_eq!(labels, vec![None, Some("40%".to_owned()), None]);
    }
}
