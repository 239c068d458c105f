use chrono::NaiveDate;
use flowmind_api::handlers::common::CountInput;
use flowmind_api::services::{analytics::generate_timeseries, forecasting::generate_predictions};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

proptest! {
    #[test]
    fn resolved_counts_stay_within_bounds(n in any::<i64>(), max in 1u32..1_000) {
        let resolved = CountInput::Value(n).resolve("days", 7, max);
        prop_assert!(resolved <= max);
        if n >= 0 && n <= i64::from(max) {
            prop_assert_eq!(i64::from(resolved), n);
        }
    }

    #[test]
    fn numeric_strings_parse_like_numbers(n in -10_000i64..10_000) {
        prop_assert_eq!(CountInput::from_str_value(Some(n.to_string().as_str())), CountInput::Value(n));
    }

    #[test]
    fn series_and_forecast_meet_at_today(
        seed in any::<u64>(),
        days in 1u32..60,
        horizon in 1u32..60,
        offset in 0i64..20_000,
    ) {
        let today = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + chrono::Duration::days(offset);
        let mut rng = StdRng::seed_from_u64(seed);

        let series = generate_timeseries(&mut rng, today, days);
        let forecast = generate_predictions(&mut rng, today, horizon);

        prop_assert_eq!(series.last().map(|p| p.date), Some(today));
        prop_assert_eq!(forecast.first().map(|p| p.date), today.succ_opt());
    }
}
