use crate::feed::Record;

/// Splits an ordered record stream into buckets keyed by interleaved
/// marker records. `marker` returns the next bucket when the record is a
/// marker; marker records themselves never reach the output. The scan
/// halts as soon as `stop` holds for the current bucket.
pub fn split_sections<'a, K, M, S>(
    records: &'a [Record],
    initial: K,
    marker: M,
    stop: S,
) -> Vec<(K, &'a Record)>
where
    K: Clone,
    M: Fn(&Record, &K) -> Option<K>,
    S: Fn(&K) -> bool,
{
    let mut current = initial;
    let mut out = Vec::new();
    for record in records {
        if let Some(next) = marker(record, &current) {
            current = next;
            if stop(&current) {
                break;
            }
            continue;
        }
        out.push((current.clone(), record));
    }
    out
}
