//! In-memory lookup serving planned production documents from a snapshot.
//!
//! The snapshot is immutable once built, so the adapter is shared across
//! workers without locking. Seed files are JSON arrays:
//!
//! ```json
//! [{ "partner": "BPNL...", "material": "urn:uuid:...", "output": { ... } }]
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{PlannedProductionLookup, PlannedProductionLookupError};
use crate::domain::{MaterialIdentifier, PartnerIdentifier, PlannedProductionOutput};

/// Errors raised while loading a snapshot seed file.
#[derive(Debug, Error)]
pub enum SnapshotSeedError {
    /// Seed file could not be read.
    #[error("failed to read planned production seed at {path}: {source}")]
    Io {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Seed content is not valid JSON or holds malformed identifiers.
    #[error("failed to parse planned production seed at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The same partner and material appear more than once.
    #[error("duplicate planned production seed entry for {partner} / {material}")]
    Duplicate {
        partner: PartnerIdentifier,
        material: MaterialIdentifier,
    },
}

#[derive(Debug, Deserialize)]
struct SeedEntry {
    partner: PartnerIdentifier,
    material: MaterialIdentifier,
    output: PlannedProductionOutput,
}

type SnapshotKey = (PartnerIdentifier, MaterialIdentifier);

/// Lookup backed by an immutable (partner, material) keyed snapshot.
///
/// # Examples
/// ```
/// use planned_production::domain::{MaterialIdentifier, PartnerIdentifier, PlannedProductionOutput};
/// use planned_production::outbound::lookup::InMemoryPlannedProductionLookup;
///
/// let partner = PartnerIdentifier::new("BPNL1234567890AB").expect("valid partner");
/// let material = MaterialIdentifier::new("urn:uuid:123e4567-e89b-12d3-a456-426614174000")
///     .expect("valid material");
/// let output = PlannedProductionOutput::new(material.as_str(), Vec::new());
///
/// let lookup = InMemoryPlannedProductionLookup::default()
///     .with_document(partner, material, output)
///     .expect("unique entry");
/// assert_eq!(lookup.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryPlannedProductionLookup {
    documents: HashMap<SnapshotKey, PlannedProductionOutput>,
}

impl InMemoryPlannedProductionLookup {
    /// Add a document, rejecting a second entry for the same key.
    pub fn with_document(
        mut self,
        partner: PartnerIdentifier,
        material: MaterialIdentifier,
        output: PlannedProductionOutput,
    ) -> Result<Self, SnapshotSeedError> {
        if self
            .documents
            .contains_key(&(partner.clone(), material.clone()))
        {
            return Err(SnapshotSeedError::Duplicate { partner, material });
        }
        self.documents.insert((partner, material), output);
        Ok(self)
    }

    /// Build a snapshot from seed JSON held in memory.
    ///
    /// `origin` is only used to label errors.
    pub fn from_json(origin: &Path, json: &str) -> Result<Self, SnapshotSeedError> {
        let entries: Vec<SeedEntry> =
            serde_json::from_str(json).map_err(|source| SnapshotSeedError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        entries
            .into_iter()
            .try_fold(Self::default(), |lookup, entry| {
                lookup.with_document(entry.partner, entry.material, entry.output)
            })
    }

    /// Load a snapshot from a seed file.
    pub fn load(path: &Path) -> Result<Self, SnapshotSeedError> {
        let json = read_seed(path).map_err(|source| SnapshotSeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lookup = Self::from_json(path, &json)?;
        info!(
            path = %path.display(),
            documents = lookup.len(),
            "loaded planned production snapshot"
        );
        Ok(lookup)
    }

    /// Number of documents in the snapshot.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the snapshot holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn read_seed(path: &Path) -> io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "seed path has no file name")
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    directory.read_to_string(Path::new(file_name))
}

#[async_trait]
impl PlannedProductionLookup for InMemoryPlannedProductionLookup {
    async fn lookup_planned_production(
        &self,
        partner: &PartnerIdentifier,
        material: &MaterialIdentifier,
    ) -> Result<Option<PlannedProductionOutput>, PlannedProductionLookupError> {
        Ok(self
            .documents
            .get(&(partner.clone(), material.clone()))
            .cloned())
    }
}
