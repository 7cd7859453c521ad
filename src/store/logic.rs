//! The ordered, duplicate-aware marker collection.

use crate::gps::GpsCoordinate;
use crate::store::structs::{ConflictDecision, InsertOutcome, Marker, MergeReport};
use tracing::debug;

/// Two coordinates whose latitude and longitude each differ by less than
/// this many degrees refer to the same place for duplicate detection.
pub const COORDINATE_EPSILON: f64 = 1e-4;

/// An ordered collection of named map markers.
///
/// Insertion order is display order is render order. The store guarantees
/// that no two markers share a name while sitting within
/// [`COORDINATE_EPSILON`] of each other on both axes; conflicts are resolved
/// by the caller via [`ConflictDecision`], never silently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationStore {
    markers: Vec<Marker>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-ordered marker list, e.g. one read from disk. The
    /// list is taken as-is.
    pub fn from_markers(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    /// Markers in insertion order, for the presentation layer to render.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn into_markers(self) -> Vec<Marker> {
        self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// True iff an existing marker has the same name and both coordinate
    /// components within [`COORDINATE_EPSILON`] of the candidate.
    pub fn is_duplicate(&self, coordinate: GpsCoordinate, name: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| marker.name == name && within_epsilon(marker.coordinate, coordinate))
    }

    /// Appends the marker, or resolves a duplicate conflict per the caller's
    /// decision.
    ///
    /// On [`ConflictDecision::Replace`] the first existing marker with the
    /// same name is removed (regardless of its coordinate) and the new
    /// marker is appended at the end of the order. On
    /// [`ConflictDecision::Skip`] the store is left unchanged.
    pub fn insert_or_replace(
        &mut self,
        marker: Marker,
        on_conflict: ConflictDecision,
    ) -> InsertOutcome {
        if !self.is_duplicate(marker.coordinate, &marker.name) {
            self.markers.push(marker);
            return InsertOutcome::Inserted;
        }
        match on_conflict {
            ConflictDecision::Skip => InsertOutcome::Skipped,
            ConflictDecision::Replace => {
                if let Some(index) = self.markers.iter().position(|m| m.name == marker.name) {
                    self.markers.remove(index);
                }
                self.markers.push(marker);
                InsertOutcome::Replaced
            }
        }
    }

    /// Renames the first marker called `old_name`, keeping its position,
    /// coordinate and timestamp. Empty names are rejected.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> bool {
        if new_name.is_empty() {
            return false;
        }
        match self.markers.iter_mut().find(|m| m.name == old_name) {
            Some(marker) => {
                marker.name = new_name.to_owned();
                true
            }
            None => false,
        }
    }

    /// Removes the first marker with the given name.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.markers.iter().position(|m| m.name == name) {
            Some(index) => {
                self.markers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    /// Applies the insert-or-replace-or-skip logic to each incoming marker,
    /// consulting `decide` only for duplicates, and reports the counts.
    pub fn merge<I, F>(&mut self, incoming: I, mut decide: F) -> MergeReport
    where
        I: IntoIterator<Item = Marker>,
        F: FnMut(&Marker) -> ConflictDecision,
    {
        let mut report = MergeReport::default();
        for marker in incoming {
            let decision = if self.is_duplicate(marker.coordinate, &marker.name) {
                decide(&marker)
            } else {
                ConflictDecision::Skip
            };
            match self.insert_or_replace(marker, decision) {
                InsertOutcome::Inserted => report.inserted += 1,
                InsertOutcome::Replaced => report.replaced += 1,
                InsertOutcome::Skipped => report.skipped += 1,
            }
        }
        debug!(
            inserted = report.inserted,
            replaced = report.replaced,
            skipped = report.skipped,
            "merged marker set"
        );
        report
    }

    /// Mean position of all markers, used to centre the map view.
    pub fn center(&self) -> Option<GpsCoordinate> {
        if self.markers.is_empty() {
            return None;
        }
        let count = self.markers.len() as f64;
        let (lat_sum, lon_sum) = self
            .markers
            .iter()
            .fold((0.0, 0.0), |(lat, lon), marker| {
                (
                    lat + marker.coordinate.latitude,
                    lon + marker.coordinate.longitude,
                )
            });
        Some(GpsCoordinate {
            latitude: lat_sum / count,
            longitude: lon_sum / count,
        })
    }
}

fn within_epsilon(a: GpsCoordinate, b: GpsCoordinate) -> bool {
    (a.latitude - b.latitude).abs() < COORDINATE_EPSILON
        && (a.longitude - b.longitude).abs() < COORDINATE_EPSILON
}
