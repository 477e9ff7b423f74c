use std::collections::BTreeMap;
use std::sync::Arc;

use crate::coord::{Coord, CoordHash};
use crate::error::BoardError;
use crate::path::Path;
use crate::payload::TraitAssignment;

use super::trie::HashTrie;
use super::{AssetRef, Label, Marker, TraitPatch, TraitRecord};

static EMPTY_RECORD: TraitRecord = TraitRecord::EMPTY;

/// Immutable snapshot mapping hashed coordinates to their trait records.
///
/// Every update returns a new store in O(log n). Records and trie nodes that
/// an update does not touch are shared between the old and new snapshot, so
/// readers holding an older store never observe a change and cloning a store
/// is a pointer copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraitStore {
    records: HashTrie<TraitRecord>,
}

impl TraitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TraitStoreBuilder {
        TraitStoreBuilder::default()
    }

    /// Builds a fresh store from image and label assignments plus the route.
    ///
    /// Lists merge additively: an image and a label for the same coordinate end
    /// up in one record. Within one list the last assignment for a coordinate
    /// wins for that field.
    pub fn rebuild(
        image_traits: &[TraitAssignment<AssetRef>],
        label_traits: &[TraitAssignment<Label>],
        paths: &[Path],
    ) -> Result<Self, BoardError> {
        Ok(Self::builder()
            .images(image_traits)?
            .labels(label_traits)?
            .paths(paths)
            .build())
    }

    /// Returns the record for `hash`, or the empty record if none was assigned.
    pub fn get(&self, hash: CoordHash) -> &TraitRecord {
        self.records
            .get(hash)
            .map(Arc::as_ref)
            .unwrap_or(&EMPTY_RECORD)
    }

    /// Returns the record at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` has a negative component.
    pub fn at(&self, coord: Coord) -> &TraitRecord {
        self.get(CoordHash::of(coord))
    }

    pub fn contains(&self, hash: CoordHash) -> bool {
        self.records.get(hash).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.len() == 0
    }

    /// Iterates records in ascending hash order.
    pub fn iter(&self) -> impl Iterator<Item = (CoordHash, &TraitRecord)> {
        self.records.iter().map(|(hash, record)| (hash, record.as_ref()))
    }

    /// Sets the outgoing path line at each path's origin. Last write wins.
    pub fn set_paths(&self, paths: &[Path]) -> Self {
        paths.iter().fold(self.clone(), |store, path| {
            store.patch_field(path.from().hash_key(), TraitPatch::PathLine(Some(*path)))
        })
    }

    pub fn set_markers(&self, markers: &[(Coord, Marker)]) -> Self {
        markers.iter().fold(self.clone(), |store, (coord, marker)| {
            store.patch_field(coord.hash_key(), TraitPatch::Marker(Some(*marker)))
        })
    }

    /// Returns a store identical to this one except for one field of one
    /// record. Patching a field of an unassigned coordinate creates the record;
    /// a patch that leaves a record empty removes it.
    pub fn patch_field(&self, hash: CoordHash, patch: TraitPatch) -> Self {
        let mut record = self.get(hash).clone();
        record.apply(patch);

        let records = if record.is_empty() {
            self.records.remove(hash)
        } else {
            self.records.insert(hash, Arc::new(record))
        };
        Self { records }
    }

    /// Points every image trait referencing `old` at `new`.
    ///
    /// Returns a clone of this store (sharing everything) if nothing references
    /// `old`.
    pub fn rename_image(&self, old: &str, new: &str) -> Self {
        let renamed = AssetRef::from(new);
        let targets: Vec<CoordHash> = self
            .iter()
            .filter(|(_, record)| record.image.as_ref().is_some_and(|image| image.as_str() == old))
            .map(|(hash, _)| hash)
            .collect();

        targets.into_iter().fold(self.clone(), |store, hash| {
            store.patch_field(hash, TraitPatch::Image(Some(renamed.clone())))
        })
    }

    /// True if both stores hold the very same record allocation for `hash`.
    ///
    /// Renderers can use this to skip recomposing tiles an update did not touch.
    pub fn shares_record_with(&self, other: &Self, hash: CoordHash) -> bool {
        match (self.records.get(hash), other.records.get(hash)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Accumulates trait assignments before freezing them into a [`TraitStore`].
#[derive(Debug, Default)]
pub struct TraitStoreBuilder {
    records: BTreeMap<CoordHash, TraitRecord>,
}

impl TraitStoreBuilder {
    pub fn images(self, assignments: &[TraitAssignment<AssetRef>]) -> Result<Self, BoardError> {
        self.assign(assignments, |record, image| record.image = Some(image.clone()))
    }

    pub fn audio(self, assignments: &[TraitAssignment<AssetRef>]) -> Result<Self, BoardError> {
        self.assign(assignments, |record, audio| record.audio = Some(audio.clone()))
    }

    pub fn labels(self, assignments: &[TraitAssignment<Label>]) -> Result<Self, BoardError> {
        self.assign(assignments, |record, label| record.labels = vec![label.clone()])
    }

    pub fn markers(mut self, markers: &[(Coord, Marker)]) -> Self {
        for (coord, marker) in markers {
            self.records.entry(coord.hash_key()).or_default().marker = Some(*marker);
        }
        self
    }

    pub fn paths(mut self, paths: &[Path]) -> Self {
        for path in paths {
            self.records
                .entry(path.from().hash_key())
                .or_default()
                .path_line = Some(*path);
        }
        self
    }

    pub fn build(self) -> TraitStore {
        TraitStore {
            records: self
                .records
                .into_iter()
                .map(|(hash, record)| (hash, Arc::new(record)))
                .collect(),
        }
    }

    fn assign<T>(
        mut self,
        assignments: &[TraitAssignment<T>],
        mut update: impl FnMut(&mut TraitRecord, &T),
    ) -> Result<Self, BoardError> {
        for assignment in assignments {
            let hash = CoordHash::try_from_coord(assignment.coord)?;
            update(self.records.entry(hash).or_default(), &assignment.value);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at<T>(x: i32, y: i32, value: T) -> TraitAssignment<T> {
        TraitAssignment::new(Coord::new(x, y), value)
    }

    fn path(from: (i32, i32), to: (i32, i32)) -> Path {
        Path::new(Coord::new(from.0, from.1), Coord::new(to.0, to.1)).unwrap()
    }

    #[test]
    fn image_and_label_merge_into_one_record() {
        let store = TraitStore::rebuild(
            &[at(1, 1, AssetRef::from("a.png"))],
            &[at(1, 1, Label::titled("L"))],
            &[],
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        let record = store.at(Coord::new(1, 1));
        assert_eq!(record.image, Some(AssetRef::from("a.png")));
        assert_eq!(record.labels, vec![Label::titled("L")]);
    }

    #[test]
    fn later_image_overwrites_earlier_for_same_coordinate() {
        let store = TraitStore::rebuild(
            &[at(2, 3, AssetRef::from("a.png")), at(2, 3, AssetRef::from("b.png"))],
            &[],
            &[],
        )
        .unwrap();

        assert_eq!(store.at(Coord::new(2, 3)).image, Some(AssetRef::from("b.png")));
    }

    #[test]
    fn later_label_overwrites_earlier_for_same_coordinate() {
        let store = TraitStore::rebuild(
            &[],
            &[at(1, 2, Label::titled("first")), at(1, 2, Label::titled("second"))],
            &[],
        )
        .unwrap();

        let titles: Vec<_> = store
            .at(Coord::new(1, 2))
            .labels
            .iter()
            .map(|label| label.title.as_str())
            .collect();
        assert_eq!(titles, vec!["second"]);
    }

    #[test]
    fn negative_assignment_coordinates_fail_the_rebuild() {
        let err = TraitStore::rebuild(&[at(-1, 1, AssetRef::from("a.png"))], &[], &[]).unwrap_err();
        assert!(matches!(err, BoardError::InvalidCoordinate { .. }));
    }

    #[test]
    fn unknown_coordinates_resolve_to_empty_record() {
        let store = TraitStore::new();
        assert_eq!(store.get(CoordHash(42)), &TraitRecord::EMPTY);
    }

    #[test]
    fn set_paths_keys_by_origin() {
        let route = [path((1, 1), (3, 1)), path((3, 1), (3, 4))];
        let store = TraitStore::new().set_paths(&route);

        assert_eq!(store.at(Coord::new(1, 1)).path_line, Some(route[0]));
        assert_eq!(store.at(Coord::new(3, 1)).path_line, Some(route[1]));
        assert!(store.at(Coord::new(3, 4)).path_line.is_none());
    }

    #[test]
    fn patch_leaves_old_snapshot_untouched() {
        let before = TraitStore::rebuild(
            &[at(1, 1, AssetRef::from("a.png")), at(2, 2, AssetRef::from("b.png"))],
            &[],
            &[],
        )
        .unwrap();
        let target = Coord::new(1, 1).hash_key();
        let untouched = Coord::new(2, 2).hash_key();

        let after = before.patch_field(target, TraitPatch::Marker(Some(Marker::Start)));

        assert!(before.get(target).marker.is_none());
        assert_eq!(after.get(target).marker, Some(Marker::Start));
        assert_eq!(after.get(target).image, Some(AssetRef::from("a.png")));
        assert!(after.shares_record_with(&before, untouched));
        assert!(!after.shares_record_with(&before, target));
    }

    #[test]
    fn clearing_the_last_field_drops_the_record() {
        let store = TraitStore::rebuild(&[at(1, 1, AssetRef::from("a.png"))], &[], &[]).unwrap();
        let hash = Coord::new(1, 1).hash_key();

        let cleared = store.patch_field(hash, TraitPatch::Image(None));

        assert!(!cleared.contains(hash));
        assert!(cleared.is_empty());
    }

    #[test]
    fn rename_image_rewrites_only_matching_records() {
        let store = TraitStore::rebuild(
            &[
                at(1, 1, AssetRef::from("forest")),
                at(2, 1, AssetRef::from("lake")),
                at(3, 1, AssetRef::from("forest")),
            ],
            &[],
            &[],
        )
        .unwrap();

        let renamed = store.rename_image("forest", "woods");

        assert_eq!(renamed.at(Coord::new(1, 1)).image, Some(AssetRef::from("woods")));
        assert_eq!(renamed.at(Coord::new(3, 1)).image, Some(AssetRef::from("woods")));
        assert_eq!(renamed.at(Coord::new(2, 1)).image, Some(AssetRef::from("lake")));
        assert!(renamed.shares_record_with(&store, Coord::new(2, 1).hash_key()));
    }

    #[test]
    fn builder_carries_audio_and_markers() {
        let store = TraitStore::builder()
            .audio(&[at(4, 4, AssetRef::from("bell.mp3"))])
            .unwrap()
            .markers(&[(Coord::new(4, 4), Marker::Finish)])
            .build();

        let record = store.at(Coord::new(4, 4));
        assert_eq!(record.audio, Some(AssetRef::from("bell.mp3")));
        assert_eq!(record.marker, Some(Marker::Finish));
    }
}
