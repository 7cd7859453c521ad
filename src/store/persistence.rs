//! JSON persistence of the marker list.
//!
//! The durable format is an ordered array of `[[lat, lon], name, timestamp]`
//! tuples. Files written by older versions carry two-element tuples without
//! the timestamp; those still load, with the timestamp absent.

use crate::store::error::PersistenceError;
use crate::store::logic::LocationStore;
use crate::store::structs::{ConflictDecision, Marker, MergeReport};
use std::fs;
use std::path::Path;

impl LocationStore {
    /// Serializes the full ordered marker list.
    pub fn to_json(&self) -> Result<Vec<u8>, PersistenceError> {
        Ok(serde_json::to_vec(&self.markers())?)
    }

    /// Parses a marker list previously produced by [`LocationStore::to_json`]
    /// (or by an older version without timestamps).
    pub fn from_json(bytes: &[u8]) -> Result<Self, PersistenceError> {
        let markers: Vec<Marker> = serde_json::from_slice(bytes)?;
        Ok(Self::from_markers(markers))
    }

    /// Writes the store to `path`. The markers are serialized before the
    /// file is opened, so an encoding failure leaves the file untouched.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(&self.markers())?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads a store from `path`. On failure nothing is constructed, so a
    /// caller's existing store is unaffected.
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let bytes = fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// Additively loads a saved file into this store, applying the usual
    /// duplicate handling. The file is read and parsed completely before any
    /// marker is merged; a failure leaves the store unchanged.
    pub fn merge_from_path<F>(
        &mut self,
        path: &Path,
        decide: F,
    ) -> Result<MergeReport, PersistenceError>
    where
        F: FnMut(&Marker) -> ConflictDecision,
    {
        let loaded = Self::load(path)?;
        Ok(self.merge(loaded.into_markers(), decide))
    }
}
