//! Core modules for vmode

pub mod lexicon;
pub mod detector;
pub mod accumulator;
pub mod calibrator;
pub mod gate;
pub mod api;

pub use detector::Detector;
pub use accumulator::{EvidenceAccumulator, SequentialTest};
pub use calibrator::{
    NonconformityScorer, ThresholdCalibrator, fingerprint, load_calibration, load_cases, rank_index,
    save_calibration,
};
pub use gate::CalibrationGate;
pub use api::{create_router, router, run_server, AppState};
