pub mod fm128_reader;
pub mod observation_reader;

pub use fm128_reader::Fm128Reader;
pub use observation_reader::{ObservationFile, ObservationReader};
