use crate::core::{Bucket, BucketSequence, Selection};

/// Expands a selection into its ordered bucket sequence.
///
/// Each entry's weekday range is expanded in Mon..Sun order, entries are kept in
/// request order, and `times` is consumed once per expanded bucket across the
/// whole sequence. Buckets past the end of `times` get `TimeOfDay::default()`.
pub fn resolve(selection: &Selection) -> BucketSequence {
    let mut times = selection.times.iter().copied();

    selection
        .entries
        .iter()
        .flat_map(|entry| entry.days.days().iter().map(move |&day| (entry.month, day)))
        .map(|(month, weekday)| Bucket::new(month, weekday, times.next().unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DayRange, FileKind, Mode, Month, TimeOfDay, Weekday};

    fn selection(months: &[Month], ranges: &[&str], times: &[TimeOfDay]) -> Selection {
        let ranges: Vec<DayRange> = ranges.iter().map(|r| r.parse().unwrap()).collect();
        Selection::from_parallel(months, &ranges, times.to_vec(), &[FileKind::Csv], Mode::Read)
            .unwrap()
    }

    #[test]
    fn test_single_weekday_per_month() {
        let buckets = resolve(&selection(
            &[Month::Mar, Month::Mar, Month::Dec],
            &["sat", "sun", "mon"],
            &[],
        ));

        assert_eq!(
            buckets,
            vec![
                Bucket::new(Month::Mar, Weekday::Sat, TimeOfDay::Am),
                Bucket::new(Month::Mar, Weekday::Sun, TimeOfDay::Am),
                Bucket::new(Month::Dec, Weekday::Mon, TimeOfDay::Am),
            ]
        );
    }

    #[test]
    fn test_range_expands_inclusively_in_canonical_order() {
        let buckets = resolve(&selection(&[Month::Jan], &["mon-wed"], &[]));
        let days: Vec<Weekday> = buckets.iter().map(|b| b.weekday).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Tue, Weekday::Wed]);
        assert!(buckets.iter().all(|b| b.month == Month::Jan));
        assert!(buckets.iter().all(|b| b.time == TimeOfDay::Am));
    }

    #[test]
    fn test_every_range_size() {
        for start in Weekday::ALL {
            for end in Weekday::ALL.iter().filter(|d| d.index() >= start.index()) {
                let token = format!("{}-{}", start, end);
                let buckets = resolve(&selection(&[Month::Jul], &[&token], &[]));
                assert_eq!(buckets.len(), end.index() - start.index() + 1, "{}", token);
                assert_eq!(buckets.first().map(|b| b.weekday), Some(start));
                assert_eq!(buckets.last().map(|b| b.weekday), Some(*end));
            }
        }
    }

    #[test]
    fn test_length_is_independent_of_times() {
        let months = [Month::Jan, Month::Feb];
        let ranges = ["mon-fri", "sat-sun"];

        let none = resolve(&selection(&months, &ranges, &[]));
        let few = resolve(&selection(&months, &ranges, &[TimeOfDay::Pm; 3]));
        let many = resolve(&selection(&months, &ranges, &[TimeOfDay::Pm; 20]));

        assert_eq!(none.len(), 7);
        assert_eq!(few.len(), 7);
        assert_eq!(many.len(), 7);
        assert!(many.iter().all(|b| b.time == TimeOfDay::Pm));
    }

    #[test]
    fn test_times_are_consumed_across_months() {
        let buckets = resolve(&selection(
            &[Month::Jan, Month::Feb],
            &["mon", "mon-tue"],
            &[TimeOfDay::Pm],
        ));

        assert_eq!(
            buckets,
            vec![
                Bucket::new(Month::Jan, Weekday::Mon, TimeOfDay::Pm),
                Bucket::new(Month::Feb, Weekday::Mon, TimeOfDay::Am),
                Bucket::new(Month::Feb, Weekday::Tue, TimeOfDay::Am),
            ]
        );
    }

    #[test]
    fn test_times_do_not_reset_per_month() {
        let buckets = resolve(&selection(
            &[Month::Apr, Month::May],
            &["mon-tue", "wed-thu"],
            &[TimeOfDay::Am, TimeOfDay::Pm, TimeOfDay::Pm],
        ));
        let times: Vec<TimeOfDay> = buckets.iter().map(|b| b.time).collect();
        assert_eq!(
            times,
            vec![TimeOfDay::Am, TimeOfDay::Pm, TimeOfDay::Pm, TimeOfDay::Am]
        );
    }

    #[test]
    fn test_empty_selection_resolves_to_nothing() {
        let empty = Selection {
            entries: vec![],
            times: vec![TimeOfDay::Pm],
            kinds: vec![FileKind::Json],
            mode: Mode::Write,
        };
        assert!(resolve(&empty).is_empty());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let sel = selection(&[Month::Oct, Month::Oct], &["thu-sun", "tue"], &[TimeOfDay::Pm]);
        assert_eq!(resolve(&sel), resolve(&sel));
    }
}
