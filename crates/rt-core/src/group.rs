// File: crates/rt-core/src/group.rs
// Summary: Partition records by a key (model-run date, region) in first-seen order.

use std::hash::Hash;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::record::RawRecord;

/// Records partitioned by key. Key order is first-seen order, which for the
/// run-date grouping is oldest run -> newest run.
#[derive(Clone, Debug)]
pub struct GroupedSeries<K> {
    groups: IndexMap<K, Vec<RawRecord>>,
}

impl<K: Hash + Eq> GroupedSeries<K> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&[RawRecord]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[RawRecord])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Most recently seen group.
    pub fn last(&self) -> Option<(&K, &[RawRecord])> {
        self.groups.last().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn into_inner(self) -> IndexMap<K, Vec<RawRecord>> {
        self.groups
    }
}

/// Group `records` by `key`. Every record lands in exactly one group.
pub fn group_by<K, F>(records: &[RawRecord], mut key: F) -> GroupedSeries<K>
where
    K: Hash + Eq,
    F: FnMut(&RawRecord) -> K,
{
    let mut groups: IndexMap<K, Vec<RawRecord>> = IndexMap::new();
    for r in records {
        groups.entry(key(r)).or_default().push(r.clone());
    }
    GroupedSeries { groups }
}

/// One group per model run; records without a run date share the `None` group.
pub fn group_by_run_date(records: &[RawRecord]) -> GroupedSeries<Option<NaiveDate>> {
    group_by(records, |r| r.run_date)
}

/// One group per region id (neighbor overlay).
pub fn group_by_region(records: &[RawRecord]) -> GroupedSeries<String> {
    group_by(records, |r| r.fips.clone())
}
