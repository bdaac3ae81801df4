pub mod observation;
pub mod record;
pub mod station;

pub use observation::{MissingDataPolicy, ObservationGrid, PointMode, RadarObservationSet, VerticalProfile};
pub use record::{Fm128Document, MeasurementLine, PointHeader, PointSection, RadarHeader, RadarSection};
pub use station::Station;
