use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::annotation::band::Band;
use crate::annotation::bandset::{
    BandSet,
    DEFAULT_BOUNDARY_TOLERANCE
};
use crate::curve::controlpointsequence::ControlPointSequence;
use crate::curve::invalidinput::InvalidInput;
use crate::pipeline::CurvePipeline;

/// OVP 區間 2–3 ... 6–7
pub const DEFAULT_BAND_EDGES: [f64; 6] = [2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("'bands' and 'band_edges' cannot both be given")]
    ConflictingBands,

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CurveConfigurationJsonProp {
    points: Vec<(f64, f64)>,
    samples_per_segment: usize,
    #[serde(default)]
    bands: Option<Vec<Band>>,
    #[serde(default)]
    band_edges: Option<Vec<f64>>,
    #[serde(default)]
    boundary_tolerance: Option<f64>,
}

/// 已驗證的執行設定：控制點、取樣密度與區間
#[derive(Debug, Clone)]
pub struct CurveConfiguration {
    control_points: ControlPointSequence,
    pipeline: CurvePipeline,
}

impl CurveConfiguration {
    pub fn from_path<P: AsRef<Path>>(file_path: P) -> Result<CurveConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: CurveConfigurationJsonProp = serde_json::from_reader(reader)?;
        Self::from_json_prop(json_prop)
    }

    pub fn from_json_str(json: &str) -> Result<CurveConfiguration, ConfigurationError> {
        let json_prop: CurveConfigurationJsonProp = serde_json::from_str(json)?;
        Self::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: CurveConfigurationJsonProp) -> Result<CurveConfiguration, ConfigurationError> {
        let tolerance = json_prop.boundary_tolerance.unwrap_or(DEFAULT_BOUNDARY_TOLERANCE);
        let band_set = match (json_prop.bands, json_prop.band_edges) {
            (Some(_), Some(_)) => return Err(ConfigurationError::ConflictingBands),
            (Some(bands), None) => BandSet::with_tolerance(bands, tolerance)?,
            (None, Some(edges)) => BandSet::from_edges_with_tolerance(&edges, tolerance)?,
            (None, None) => BandSet::from_edges_with_tolerance(&DEFAULT_BAND_EDGES, tolerance)?,
        };
        let pipeline = CurvePipeline::new(json_prop.samples_per_segment, band_set)?;
        let control_points = ControlPointSequence::new(&json_prop.points)?;
        Ok(CurveConfiguration { control_points, pipeline })
    }

    pub fn control_points(&self) -> &ControlPointSequence {
        &self.control_points
    }

    pub fn pipeline(&self) -> &CurvePipeline {
        &self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ovp_bands() {
        let config = CurveConfiguration::from_json_str(
            r#"{"points": [[2.0, 0.4], [3.5, 0.49]], "samples_per_segment": 10}"#,
        )
        .unwrap();
        let band_set = config.pipeline().band_set();
        assert_eq!(band_set.labels(), vec!["2–3", "3–4", "4–5", "5–6", "6–7"]);
        assert_eq!(band_set.tolerance(), DEFAULT_BOUNDARY_TOLERANCE);
        assert_eq!(config.pipeline().sampler().samples_per_segment(), 10);
        assert_eq!(config.control_points().len(), 2);
    }

    #[test]
    fn explicit_bands_and_tolerance() {
        let config = CurveConfiguration::from_json_str(
            r#"{
                "points": [[0.0, 0.1], [1.0, 0.2]],
                "samples_per_segment": 4,
                "bands": [
                    {"lower": 0.0, "upper": 0.5, "label": "low"},
                    {"lower": 0.5, "upper": 1.0, "label": "high"}
                ],
                "boundary_tolerance": 0.0
            }"#,
        )
        .unwrap();
        assert_eq!(config.pipeline().band_set().labels(), vec!["low", "high"]);
        assert_eq!(config.pipeline().band_set().tolerance(), 0.0);
    }

    #[test]
    fn band_edges_are_accepted() {
        let config = CurveConfiguration::from_json_str(
            r#"{"points": [[0.0, 0.1], [1.0, 0.2]], "samples_per_segment": 4, "band_edges": [0, 0.5, 1]}"#,
        )
        .unwrap();
        assert_eq!(config.pipeline().band_set().labels(), vec!["0–0.5", "0.5–1"]);
    }

    #[test]
    fn conflicting_band_sources_are_rejected() {
        let err = CurveConfiguration::from_json_str(
            r#"{
                "points": [[0.0, 0.1], [1.0, 0.2]],
                "samples_per_segment": 4,
                "bands": [{"lower": 0.0, "upper": 1.0, "label": "all"}],
                "band_edges": [0, 1]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::ConflictingBands));
    }

    #[test]
    fn invalid_input_is_forwarded() {
        let err = CurveConfiguration::from_json_str(
            r#"{"points": [[3.0, 0.1], [3.0, 0.2]], "samples_per_segment": 10}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidInput(InvalidInput::DuplicateX { .. })));

        let err = CurveConfiguration::from_json_str(
            r#"{"points": [[2.0, 0.1], [3.0, 0.2]], "samples_per_segment": 2}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidInput(InvalidInput::SampleDensityTooLow { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CurveConfiguration::from_json_str(r#"{"points": "nope"}"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::JsonParseError(_)));

        let err = CurveConfiguration::from_json_str(
            r#"{"points": [[0, 0], [1, 1]], "samples_per_segment": -5}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::JsonParseError(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CurveConfiguration::from_path("/nonexistent/ovpcurve/config.json").unwrap_err();
        assert!(matches!(err, ConfigurationError::IOError(_)));
    }
}
