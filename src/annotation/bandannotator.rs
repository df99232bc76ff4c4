use crate::annotation::bandset::BandSet;
use crate::curve::densesequence::DenseSequence;

/// 每個取樣點對各區間的 y 投影；取樣點只在所屬區間有值，其他皆為 None。
///
/// 回傳列表與取樣序列同長，內層長度等於區間數。
pub fn annotate_bands(dense: &DenseSequence, band_set: &BandSet) -> Vec<Vec<Option<f64>>> {
    dense
        .iter()
        .map(|sample| {
            let mut values = vec![None; band_set.len()];
            if let Some(i) = band_set.band_index(sample.x()) {
                values[i] = Some(sample.y());
            }
            values
        })
        .collect()
}
