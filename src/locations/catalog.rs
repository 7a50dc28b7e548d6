use crate::locations::models::Location;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read the locations file")]
    Io(#[from] io::Error),
    #[error("line {line} of the locations file is not a valid location")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("location `{id}` has coordinates outside of the valid range")]
    InvalidPosition { id: String },
    #[error("location `{id}` has a non-positive aspect ratio")]
    InvalidAspectRatio { id: String },
    #[error("location id `{id}` appears more than once")]
    DuplicateId { id: String },
    #[error("the locations file contains no locations")]
    Empty,
}

/// Reads a newline-delimited JSON catalog, one location per line. Blank lines are skipped.
pub fn load(path: &Path) -> Result<Vec<Location>, CatalogError> {
    let locations_file = File::open(path)?;
    parse(BufReader::new(locations_file))
}

pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Location>, CatalogError> {
    let mut locations = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let location: Location =
            serde_json::from_str(&line).map_err(|source| CatalogError::Malformed {
                line: index + 1,
                source,
            })?;
        locations.push(location);
    }
    validate(&locations)?;
    Ok(locations)
}

fn validate(locations: &[Location]) -> Result<(), CatalogError> {
    if locations.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen_ids = HashSet::with_capacity(locations.len());
    for location in locations {
        if !location.position.is_valid() {
            return Err(CatalogError::InvalidPosition {
                id: location.id.clone(),
            });
        }
        if location.aspect_ratio.is_nan() || location.aspect_ratio <= 0.0 {
            return Err(CatalogError::InvalidAspectRatio {
                id: location.id.clone(),
            });
        }
        if !seen_ids.insert(location.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: location.id.clone(),
            });
        }
    }
    Ok(())
}
