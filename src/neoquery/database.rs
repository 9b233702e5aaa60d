//! # The linked object/approach graph
//!
//! [`NeoDatabase`] owns every [`NearEarthObject`] and [`CloseApproach`] loaded
//! for a run. Construction performs the one-time linking pass: each approach
//! is resolved to its object through a designation index, and the object's
//! approach list is filled in the order approaches were loaded.
//!
//! Approaches whose designation matches no object stay unlinked. They remain
//! part of [`NeoDatabase::linked_approaches`] and are therefore visible to
//! queries; filters on object attributes report them as
//! [`crate::error::NeoError::AttributeUnavailable`].
//!
//! Nothing mutates the graph after [`NeoDatabase::new`] returns.

use crate::filters::ApproachFilter;
use crate::model::{ApproachId, CloseApproach, LinkedApproach, NearEarthObject, NeoId};
use crate::query::{query, Query};
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
}

impl NeoDatabase {
    /// Build the database and link every approach to its object.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let by_designation = designation_index(&neos);
        let by_name = name_index(&neos);
        let linked = link(&mut neos, &mut approaches, &by_designation);

        debug!(
            neos = neos.len(),
            approaches = approaches.len(),
            linked,
            "linked close approaches to objects"
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
        }
    }

    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation.trim())
            .and_then(|id| self.neo(*id))
    }

    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name.trim()).and_then(|id| self.neo(*id))
    }

    /// View an approach together with its linked object.
    pub fn linked(&self, id: ApproachId) -> Option<LinkedApproach<'_>> {
        self.approaches
            .get(id.0)
            .map(|approach| self.view(approach))
    }

    /// Every approach in load order, linked or not.
    pub fn linked_approaches(&self) -> impl Iterator<Item = LinkedApproach<'_>> + '_ {
        self.approaches.iter().map(move |approach| self.view(approach))
    }

    /// The approaches of one object, in load order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = LinkedApproach<'a>> + 'a {
        neo.approaches()
            .iter()
            .filter_map(move |id| self.approaches.get(id.0))
            .map(move |approach| LinkedApproach::new(approach, Some(neo)))
    }

    /// Lazily select the approaches that pass every filter.
    pub fn query<'a, 'f>(
        &'a self,
        filters: &'f [Box<dyn ApproachFilter>],
    ) -> Query<'f, impl Iterator<Item = LinkedApproach<'a>> + 'a> {
        query(self.linked_approaches(), filters)
    }

    fn view<'a>(&'a self, approach: &'a CloseApproach) -> LinkedApproach<'a> {
        LinkedApproach::new(approach, approach.neo.and_then(|id| self.neo(id)))
    }
}

fn designation_index(neos: &[NearEarthObject]) -> HashMap<String, NeoId> {
    let mut index = HashMap::with_capacity(neos.len());
    for (i, neo) in neos.iter().enumerate() {
        if index.contains_key(&neo.designation) {
            warn!(designation = %neo.designation, "duplicate designation, keeping the first object");
            continue;
        }
        index.insert(neo.designation.clone(), NeoId(i));
    }
    index
}

fn name_index(neos: &[NearEarthObject]) -> HashMap<String, NeoId> {
    let mut index = HashMap::new();
    for (i, neo) in neos.iter().enumerate() {
        if let Some(name) = &neo.name {
            index.entry(name.clone()).or_insert(NeoId(i));
        }
    }
    index
}

/// Link approaches to objects through the designation index.
///
/// Approaches that already carry a link are skipped, so calling this again on
/// the same collections never duplicates an entry in an object's approach
/// list. Returns the number of approaches newly linked.
pub fn link(
    neos: &mut [NearEarthObject],
    approaches: &mut [CloseApproach],
    index: &HashMap<String, NeoId>,
) -> usize {
    let mut linked = 0;
    for (i, approach) in approaches.iter_mut().enumerate() {
        if approach.neo.is_some() {
            continue;
        }
        let Some(&neo_id) = index.get(approach.designation()) else {
            continue;
        };
        let Some(neo) = neos.get_mut(neo_id.0) else {
            continue;
        };
        if neo.designation != approach.designation() {
            continue;
        }

        neo.approaches.push(ApproachId(i));
        approach.neo = Some(neo_id);
        linked += 1;
    }
    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::cd_to_datetime;

    fn approach(designation: &str, cd: &str) -> CloseApproach {
        CloseApproach::new(designation, cd_to_datetime(cd).unwrap(), 0.1, 10.0)
    }

    fn sample() -> NeoDatabase {
        let neos = vec![
            NearEarthObject::new("433", Some("Eros".into()), 16.84, false),
            NearEarthObject::new("2020 AB", None, f64::NAN, true),
        ];
        let approaches = vec![
            approach("433", "1900-Jan-01 00:00"),
            approach("2020 AB", "1900-Jan-02 00:00"),
            approach("433", "1900-Jan-03 00:00"),
            approach("9999", "1900-Jan-04 00:00"),
        ];
        NeoDatabase::new(neos, approaches)
    }

    #[test]
    fn links_approaches_to_their_object() {
        let db = sample();
        for linked in db.linked_approaches() {
            if let Some(neo) = linked.neo {
                assert_eq!(neo.designation, linked.approach.designation());
            }
        }

        let eros = db.get_neo_by_designation("433").unwrap();
        assert_eq!(eros.approaches(), &[ApproachId(0), ApproachId(2)]);
        let other = db.get_neo_by_designation("2020 AB").unwrap();
        assert_eq!(other.approaches(), &[ApproachId(1)]);
    }

    #[test]
    fn unmatched_approach_stays_unlinked_and_kept() {
        let db = sample();
        assert_eq!(db.approaches().len(), 4);
        let orphan = db.linked(ApproachId(3)).unwrap();
        assert!(orphan.neo.is_none());
        assert_eq!(orphan.approach.neo_id(), None);
    }

    #[test]
    fn approaches_of_preserves_load_order() {
        let db = sample();
        let eros = db.get_neo_by_designation("433").unwrap();
        let times: Vec<String> = db
            .approaches_of(eros)
            .map(|linked| linked.approach.time_str())
            .collect();
        assert_eq!(times, vec!["1900-01-01 00:00", "1900-01-03 00:00"]);
    }

    #[test]
    fn linking_twice_does_not_duplicate() {
        let mut neos = vec![NearEarthObject::new("433", None, 1.0, false)];
        let mut approaches = vec![approach("433", "1900-Jan-01 00:00")];
        let index = designation_index(&neos);

        assert_eq!(link(&mut neos, &mut approaches, &index), 1);
        assert_eq!(link(&mut neos, &mut approaches, &index), 0);
        assert_eq!(neos[0].approaches().len(), 1);
        assert_eq!(approaches[0].neo_id(), Some(NeoId(0)));
    }

    #[test]
    fn many_approaches_to_one_object_link_once_each() {
        let count = 50_000;
        let approaches = (0..count)
            .map(|_| approach("433", "1900-Jan-01 00:00"))
            .collect();
        let db = NeoDatabase::new(
            vec![NearEarthObject::new("433", None, 1.0, false)],
            approaches,
        );

        let eros = db.get_neo_by_designation("433").unwrap();
        let expected: Vec<ApproachId> = (0..count).map(ApproachId).collect();
        assert_eq!(eros.approaches(), expected.as_slice());
        assert!(db.approaches().iter().all(|a| a.neo_id() == Some(NeoId(0))));
    }

    #[test]
    fn lookup_by_name_ignores_unnamed() {
        let db = sample();
        assert_eq!(db.get_neo_by_name("Eros").unwrap().designation, "433");
        assert!(db.get_neo_by_name("").is_none());
        assert!(db.get_neo_by_name("Apophis").is_none());
    }

    #[test]
    fn duplicate_designation_keeps_first() {
        let neos = vec![
            NearEarthObject::new("433", Some("Eros".into()), 16.84, false),
            NearEarthObject::new("433", Some("Impostor".into()), 1.0, true),
        ];
        let db = NeoDatabase::new(neos, vec![approach("433", "1900-Jan-01 00:00")]);
        let eros = db.get_neo_by_designation("433").unwrap();
        assert_eq!(eros.name.as_deref(), Some("Eros"));
        assert_eq!(eros.approaches().len(), 1);
        assert!(db.neos()[1].approaches().is_empty());
    }
}
