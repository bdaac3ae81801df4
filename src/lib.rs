pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod processors;
pub mod readers;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{RadarError, Result};
pub use models::{
    MissingDataPolicy, ObservationGrid, PointMode, RadarObservationSet, Station, VerticalProfile,
};
pub use writers::{encode, EncodeSummary, EncodeWarning, Fm128Writer};
