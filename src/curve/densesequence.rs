use crate::math::curve::point2d::DenseSample;

/// 曲線取樣結果，接合點只出現一次
#[derive(Debug, Clone, PartialEq)]
pub struct DenseSequence {
    samples: Vec<DenseSample>,
}

impl DenseSequence {
    pub(crate) fn new(samples: Vec<DenseSample>) -> DenseSequence {
        DenseSequence { samples }
    }

    pub fn samples(&self) -> &[DenseSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DenseSample> {
        self.samples.iter()
    }

    /// x 距離最近的取樣索引；距離相同時取最前面的一個。
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, sample) in self.samples.iter().enumerate() {
            let distance = (sample.x() - x).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<'a> IntoIterator for &'a DenseSequence {
    type Item = &'a DenseSample;
    type IntoIter = std::slice::Iter<'a, DenseSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
