pub mod fm128_writer;

pub use fm128_writer::{encode, EncodeSummary, EncodeWarning, Fm128Writer, RadarSummary};
