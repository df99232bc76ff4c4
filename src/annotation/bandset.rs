use std::collections::HashSet;

use crate::annotation::band::{
    Band,
    range_label
};
use crate::curve::invalidinput::{
    CurveResult,
    InvalidInput
};

/// 邊界判定預設容差，吸收樣條求值的浮點漂移
pub const DEFAULT_BOUNDARY_TOLERANCE: f64 = 1e-9;

/// 依序相鄰、互不重疊的區間列表。
///
/// 每個區間的 upper 必須恰好等於下一個區間的 lower；末段兩端皆為閉區間。
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    bands: Vec<Band>,
    tolerance: f64,
}

impl BandSet {
    pub fn new(bands: Vec<Band>) -> CurveResult<BandSet> {
        Self::with_tolerance(bands, DEFAULT_BOUNDARY_TOLERANCE)
    }

    pub fn with_tolerance(bands: Vec<Band>, tolerance: f64) -> CurveResult<BandSet> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(InvalidInput::InvalidTolerance { tolerance });
        }
        if bands.is_empty() {
            return Err(InvalidInput::EmptyBandList);
        }

        let mut seen = HashSet::with_capacity(bands.len());
        for (i, band) in bands.iter().enumerate() {
            if !band.lower().is_finite() || !band.upper().is_finite() || band.lower() >= band.upper() {
                return Err(InvalidInput::InvalidBandBounds {
                    label: band.label().to_owned(),
                    lower: band.lower(),
                    upper: band.upper(),
                });
            }
            if i > 0 && bands[i - 1].upper() != band.lower() {
                return Err(InvalidInput::NonContiguousBands {
                    label: band.label().to_owned(),
                    previous_upper: bands[i - 1].upper(),
                    lower: band.lower(),
                });
            }
            if !seen.insert(band.label()) {
                return Err(InvalidInput::DuplicateBandLabel { label: band.label().to_owned() });
            }
        }

        Ok(BandSet { bands, tolerance })
    }

    /// 由遞增邊界 [e0, e1, ..., en] 產生 n 個相鄰區間，標籤形如 "2–3"
    pub fn from_edges(edges: &[f64]) -> CurveResult<BandSet> {
        Self::from_edges_with_tolerance(edges, DEFAULT_BOUNDARY_TOLERANCE)
    }

    pub fn from_edges_with_tolerance(edges: &[f64], tolerance: f64) -> CurveResult<BandSet> {
        if edges.len() < 2 {
            return Err(InvalidInput::TooFewBandEdges { required: 2, actual: edges.len() });
        }
        let bands = edges
            .windows(2)
            .map(|w| Band::new(w[0], w[1], range_label(w[0], w[1])))
            .collect();
        Self::with_tolerance(bands, tolerance)
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn labels(&self) -> Vec<String> {
        self.bands.iter().map(|b| b.label().to_owned()).collect()
    }

    /// x 所屬區間的索引；不屬於任何區間時為 None
    pub fn band_index(&self, x: f64) -> Option<usize> {
        let last = self.bands.len() - 1;
        self.bands
            .iter()
            .enumerate()
            .position(|(i, band)| band.contains(x, i == last, self.tolerance))
    }
}
