pub type Interval = (i32, i32);

pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|&(start, _)| start);
    let mut merged = Vec::new();
    let mut iter = sorted.into_iter();
    if let Some(mut current) = iter.next() {
        for (start, end) in iter {
            if start >= current.0 && start <= current.1 {
                if end > current.1 {
                    current.1 = end;
                }
            } else {
                merged.push(current);
                current = (start, end);
            }
        }
        merged.push(current);
    }
    merged
}
