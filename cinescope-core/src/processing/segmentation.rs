//! Segmentation of a timeline into beats.
//!
//! Consecutive records sharing (action, framing) collapse into one beat whose
//! subject set is the union of its members' subjects. Stretches of
//! "No action detected" still end the preceding beat but never produce one.
//!
//! The collapsing itself is a generic run-length fold ([`collapse_runs`]);
//! durations and filtering are applied to the finished runs.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::processing::fusion::ClassificationRecord;
use crate::processing::labels::{ActionLabel, Framing};

/// How beat durations are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationConvention {
    /// Inner beats last until the next run starts; the final beat lasts from
    /// its start through its last sample inclusive.
    #[default]
    Legacy,
    /// Every beat lasts from its start through its last member inclusive.
    MemberSpan,
}

/// A maximal run of equal-key items.
#[derive(Debug, Clone, PartialEq)]
pub struct Run<K, A> {
    pub key: K,
    /// Position of the first member.
    pub first: u64,
    /// Position of the last member.
    pub last: u64,
    /// Number of members.
    pub len: usize,
    /// Aggregate folded over the members.
    pub acc: A,
}

/// Collapses consecutive items with equal keys into runs.
///
/// `start` builds the aggregate from a run's first member and `merge` folds
/// every further member into it. Runs are returned in input order.
pub fn collapse_runs<T, K, A, I>(
    items: I,
    key: impl Fn(&T) -> K,
    position: impl Fn(&T) -> u64,
    start: impl Fn(&T) -> A,
    mut merge: impl FnMut(&mut A, &T),
) -> Vec<Run<K, A>>
where
    I: IntoIterator<Item = T>,
    K: PartialEq,
{
    let mut runs: Vec<Run<K, A>> = Vec::new();
    for item in items {
        let item_key = key(&item);
        match runs.last_mut() {
            Some(open) if open.key == item_key => {
                open.last = position(&item);
                open.len += 1;
                merge(&mut open.acc, &item);
            }
            _ => {
                let at = position(&item);
                runs.push(Run {
                    key: item_key,
                    first: at,
                    last: at,
                    len: 1,
                    acc: start(&item),
                });
            }
        }
    }
    runs
}

/// A contiguous stretch of samples sharing one action and framing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Beat {
    pub action: ActionLabel,
    pub framing: Framing,
    pub subjects: BTreeSet<String>,
    /// Timestamp of the first member, in seconds.
    pub start: u64,
    /// Length in seconds.
    pub duration: u64,
}

/// Segments records, which should be in increasing timestamp order, into beats.
///
/// Records are keyed by their action and `camera_angle`. An all "No action
/// detected" timeline yields no beats. Out-of-order timestamps clamp the
/// affected durations at zero instead of underflowing.
pub fn segment(records: &[ClassificationRecord], convention: DurationConvention) -> Vec<Beat> {
    let runs = collapse_runs(
        records,
        |record: &&ClassificationRecord| (record.action(), record.camera_angle),
        |record: &&ClassificationRecord| record.timestamp,
        |record: &&ClassificationRecord| record.objects.clone(),
        |subjects: &mut BTreeSet<String>, record: &&ClassificationRecord| {
            subjects.extend(record.objects.iter().cloned())
        },
    );

    let next_starts = runs.iter().skip(1).map(|run| Some(run.first)).chain([None]);

    runs.iter()
        .zip(next_starts)
        .filter(|(run, _)| !run.key.0.is_no_action())
        .map(|(run, next_start)| {
            let duration = match (convention, next_start) {
                (DurationConvention::Legacy, Some(next)) => next.saturating_sub(run.first),
                _ => run.last.saturating_sub(run.first) + 1,
            };
            let (action, framing) = run.key;
            log::debug!(
                "Sealed beat: {} / {} at {}s for {}s ({} sample(s))",
                action,
                framing,
                run.first,
                duration,
                run.len
            );
            Beat {
                action,
                framing,
                subjects: run.acc.clone(),
                start: run.first,
                duration,
            }
        })
        .collect()
}
