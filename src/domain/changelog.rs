use std::collections::BTreeMap;

use crate::domain::commit::CommitRecord;

/// Commits bucketed by date key, each bucket in fetch order.
#[derive(Debug, Default)]
pub struct DateGroups<'a> {
    groups: BTreeMap<&'a str, Vec<&'a CommitRecord>>,
}

impl<'a> DateGroups<'a> {
    /// Buckets in descending key order. Keys compare as plain strings, so
    /// `Unknown Date` lands ahead of every `YYYY-MM-DD` key.
    pub fn descending(&self) -> impl Iterator<Item = (&'a str, &[&'a CommitRecord])> + '_ {
        self.groups
            .iter()
            .rev()
            .map(|(key, commits)| (*key, commits.as_slice()))
    }
}

pub fn group_by_date(commits: &[CommitRecord]) -> DateGroups<'_> {
    let mut groups: BTreeMap<&str, Vec<&CommitRecord>> = BTreeMap::new();
    for commit in commits {
        groups.entry(commit.date_key()).or_default().push(commit);
    }
    DateGroups { groups }
}
