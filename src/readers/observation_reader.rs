use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::RadarObservationSet;

/// On-disk JSON container for observation sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationFile {
    pub radars: Vec<RadarObservationSet>,
}

/// Loads radar observation sets prepared by an upstream ingestion step.
pub struct ObservationReader;

impl ObservationReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path) -> Result<Vec<RadarObservationSet>> {
        let reader = BufReader::new(File::open(path)?);
        let file: ObservationFile = serde_json::from_reader(reader)?;
        Ok(file.radars)
    }

    pub fn write_file(&self, radars: &[RadarObservationSet], path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(
            &mut writer,
            &ObservationFile {
                radars: radars.to_vec(),
            },
        )?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}
