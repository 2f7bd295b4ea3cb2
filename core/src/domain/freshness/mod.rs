use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Day window that defines the "expiring soon" bucket.
pub const DEFAULT_EXPIRY_THRESHOLD_DAYS: i64 = 3;

/// Discrete expiry-risk bucket. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessBucket {
    Expired,
    ExpiringSoon,
    Fresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    pub bucket: FreshnessBucket,
    pub days_until_expiry: i64,
}

/// Classify an expiry date against a reference date.
///
/// Day counts are calendar-day differences, so time-of-day can never move an
/// item expiring today into another bucket. The three buckets partition all
/// possible day counts: day 0 and day == threshold are both `ExpiringSoon`,
/// day == threshold + 1 is `Fresh`.
pub fn classify(
    expiry_date: NaiveDate,
    reference_date: NaiveDate,
    threshold_days: i64,
) -> Freshness {
    let days_until_expiry = (expiry_date - reference_date).num_days();

    let bucket = if days_until_expiry < 0 {
        FreshnessBucket::Expired
    } else if days_until_expiry <= threshold_days {
        FreshnessBucket::ExpiringSoon
    } else {
        FreshnessBucket::Fresh
    };

    Freshness {
        bucket,
        days_until_expiry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn buckets_partition_the_day_axis() {
        let reference = date(2024, 6, 10);

        for offset in -30i64..=30 {
            let expiry = if offset < 0 {
                reference - chrono::Days::new(offset.unsigned_abs())
            } else {
                reference + chrono::Days::new(offset as u64)
            };

            let freshness = classify(expiry, reference, DEFAULT_EXPIRY_THRESHOLD_DAYS);
            assert_eq!(freshness.days_until_expiry, offset);

            let expected = if offset < 0 {
                FreshnessBucket::Expired
            } else if offset <= DEFAULT_EXPIRY_THRESHOLD_DAYS {
                FreshnessBucket::ExpiringSoon
            } else {
                FreshnessBucket::Fresh
            };
            assert_eq!(freshness.bucket, expected, "offset {offset}");
        }
    }

    #[test]
    fn threshold_boundaries_are_inclusive() {
        let reference = date(2024, 6, 10);

        let at_threshold = classify(date(2024, 6, 13), reference, 3);
        assert_eq!(at_threshold.bucket, FreshnessBucket::ExpiringSoon);
        assert_eq!(at_threshold.days_until_expiry, 3);

        let past_threshold = classify(date(2024, 6, 14), reference, 3);
        assert_eq!(past_threshold.bucket, FreshnessBucket::Fresh);
        assert_eq!(past_threshold.days_until_expiry, 4);

        let yesterday = classify(date(2024, 6, 9), reference, 3);
        assert_eq!(yesterday.bucket, FreshnessBucket::Expired);
        assert_eq!(yesterday.days_until_expiry, -1);
    }

    #[test]
    fn expiring_today_is_expiring_soon() {
        let reference = date(2024, 6, 10);
        let today = classify(reference, reference, 3);
        assert_eq!(today.bucket, FreshnessBucket::ExpiringSoon);
        assert_eq!(today.days_until_expiry, 0);
    }

    #[test]
    fn two_days_out_is_expiring_soon() {
        let freshness = classify(date(2024, 6, 12), date(2024, 6, 10), 3);
        assert_eq!(freshness.days_until_expiry, 2);
        assert_eq!(freshness.bucket, FreshnessBucket::ExpiringSoon);
    }

    #[test]
    fn zero_threshold_still_partitions() {
        let reference = date(2024, 6, 10);
        assert_eq!(
            classify(reference, reference, 0).bucket,
            FreshnessBucket::ExpiringSoon
        );
        assert_eq!(
            classify(date(2024, 6, 11), reference, 0).bucket,
            FreshnessBucket::Fresh
        );
    }
}
