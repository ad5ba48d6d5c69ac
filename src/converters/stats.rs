//! Attempt statistics aggregation.
//!
//! Every function here returns `None` when any link of
//! attempt -> output -> sync -> summary -> stats is missing, so the view shows
//! "no data" instead of zero counters.

use crate::models::{Attempt, SyncStats};
use crate::views::{AttemptStats, AttemptStreamStats};

fn to_attempt_stats(stats: &SyncStats) -> AttemptStats {
    AttemptStats {
        bytes_emitted: stats.bytes_emitted,
        records_emitted: stats.records_emitted,
        state_messages_emitted: stats.source_state_messages_emitted,
        records_committed: stats.records_committed,
    }
}

/// Totals across all streams of the attempt
pub fn total_stats(attempt: &Attempt) -> Option<AttemptStats> {
    attempt
        .sync_summary()
        .and_then(|summary| summary.total_stats.as_ref())
        .map(to_attempt_stats)
}

/// Per-stream stats, in the order the attempt recorded them
pub fn stream_stats(attempt: &Attempt) -> Option<Vec<AttemptStreamStats>> {
    attempt
        .sync_summary()
        .and_then(|summary| summary.stream_stats.as_ref())
        .map(|streams| {
            streams
                .iter()
                .map(|stream| AttemptStreamStats {
                    stream_name: stream.stream_name.clone(),
                    stream_namespace: stream.stream_namespace.clone(),
                    stats: to_attempt_stats(&stream.stats),
                })
                .collect()
        })
}

/// Legacy `(bytes_synced, records_synced)` pair, duplicated from the totals
pub fn legacy_synced_counts(total: Option<&AttemptStats>) -> (Option<u64>, Option<u64>) {
    match total {
        Some(stats) => (stats.bytes_emitted, stats.records_emitted),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AttemptStatus, JobOutput, StandardSyncOutput, StandardSyncSummary, StreamSyncStats,
    };

    fn attempt(summary: Option<StandardSyncSummary>) -> Attempt {
        Attempt {
            attempt_number: 1,
            job_id: 9,
            status: AttemptStatus::Succeeded,
            output: summary.map(|summary| JobOutput {
                sync: Some(StandardSyncOutput {
                    standard_sync_summary: Some(summary),
                }),
            }),
            failure_summary: None,
            log_path: None,
            created_at_in_second: 1,
            updated_at_in_second: 2,
            ended_at_in_second: Some(2),
        }
    }

    fn sync_stats(bytes: u64, records: u64) -> SyncStats {
        SyncStats {
            bytes_emitted: Some(bytes),
            records_emitted: Some(records),
            source_state_messages_emitted: Some(1),
            records_committed: Some(records),
        }
    }

    #[test]
    fn absent_output_yields_absent_stats() {
        let attempt = attempt(None);

        assert_eq!(total_stats(&attempt), None);
        assert_eq!(stream_stats(&attempt), None);
        assert_eq!(legacy_synced_counts(None), (None, None));
    }

    #[test]
    fn summary_without_stats_yields_absent_stats() {
        let attempt = attempt(Some(StandardSyncSummary::default()));

        assert_eq!(total_stats(&attempt), None);
        assert_eq!(stream_stats(&attempt), None);
    }

    #[test]
    fn maps_totals_field_by_field() {
        let attempt = attempt(Some(StandardSyncSummary {
            total_stats: Some(SyncStats {
                bytes_emitted: Some(2048),
                records_emitted: Some(20),
                source_state_messages_emitted: Some(4),
                records_committed: None,
            }),
            ..StandardSyncSummary::default()
        }));

        let totals = total_stats(&attempt).unwrap();
        assert_eq!(totals.bytes_emitted, Some(2048));
        assert_eq!(totals.records_emitted, Some(20));
        assert_eq!(totals.state_messages_emitted, Some(4));
        assert_eq!(totals.records_committed, None);
        assert_eq!(legacy_synced_counts(Some(&totals)), (Some(2048), Some(20)));
    }

    #[test]
    fn stream_stats_keep_source_order() {
        let attempt = attempt(Some(StandardSyncSummary {
            stream_stats: Some(vec![
                StreamSyncStats {
                    stream_name: "users".to_string(),
                    stream_namespace: Some("public".to_string()),
                    stats: sync_stats(300, 3),
                },
                StreamSyncStats {
                    stream_name: "accounts".to_string(),
                    stream_namespace: None,
                    stats: sync_stats(100, 1),
                },
            ]),
            ..StandardSyncSummary::default()
        }));

        let streams = stream_stats(&attempt).unwrap();
        let names: Vec<&str> = streams.iter().map(|s| s.stream_name.as_str()).collect();
        assert_eq!(names, vec!["users", "accounts"]);
        assert_eq!(streams[0].stream_namespace.as_deref(), Some("public"));
        assert_eq!(streams[1].stats.bytes_emitted, Some(100));
        assert_eq!(streams[1].stats.state_messages_emitted, Some(1));
    }
}
