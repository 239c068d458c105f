//! Clock and randomness seams shared by handlers and services.
use chrono::{DateTime, NaiveDate, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Source of the current instant. Generators take "today" from here so a
/// fixed instant can be injected in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of [`Clock::now`] in UTC.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock backed by `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midday UTC on the given date, or `None` for an impossible date.
    pub fn on_date(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .map(|dt| Self(dt.and_utc()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

tokio::task_local! {
    static REQUEST_CLOCK: Arc<dyn Clock>;
}

/// Run `future` with `clock` as the clock for everything built outside a
/// handler's reach, such as error bodies and panic responses.
pub async fn scope_request_clock<Fut, R>(clock: Arc<dyn Clock>, future: Fut) -> R
where
    Fut: Future<Output = R>,
{
    REQUEST_CLOCK.scope(clock, future).await
}

/// Current instant from the request's clock, or the wall clock outside a
/// request scope.
pub fn request_now() -> DateTime<Utc> {
    REQUEST_CLOCK
        .try_with(|clock| clock.now())
        .unwrap_or_else(|_| Utc::now())
}

/// Process-wide random source handed to the generators.
///
/// `Entropy` draws from the per-thread generator and needs no coordination.
/// `Seeded` shares one `StdRng` so a configured seed replays the same
/// sequence of draws; the lock is held for a single generation call.
#[derive(Clone)]
pub enum RandomSource {
    Entropy,
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or(Self::Entropy)
    }

    /// Run `f` with exclusive access to the underlying generator.
    pub fn with<T>(&self, f: impl FnOnce(&mut dyn rand::RngCore) -> T) -> T {
        match self {
            Self::Entropy => f(&mut rand::thread_rng()),
            Self::Seeded(rng) => {
                let mut guard = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                f(&mut *guard)
            }
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::Entropy
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => f.write_str("RandomSource::Entropy"),
            Self::Seeded(_) => f.write_str("RandomSource::Seeded"),
        }
    }
}

/// Round to two decimals, used for rate-style fields.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Draw a float in `[low, high]` and round it to two decimals.
pub(crate) fn rate_between<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    round2(rng.gen_range(low..=high))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = FixedClock::on_date(2024, 6, 10).expect("valid date");
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(clock.now().to_rfc3339(), "2024-06-10T12:00:00+00:00");
    }

    #[test]
    fn fixed_clock_rejects_impossible_dates() {
        assert!(FixedClock::on_date(2024, 2, 30).is_none());
    }

    #[test]
    fn seeded_sources_replay_the_same_draws() {
        let a = RandomSource::seeded(42);
        let b = RandomSource::seeded(42);
        let draws_a: Vec<u32> = (0..5).map(|_| a.with(|rng| rng.gen_range(0..1000))).collect();
        let draws_b: Vec<u32> = (0..5).map(|_| b.with(|rng| rng.gen_range(0..1000))).collect();
        assert_eq!(draws_a, draws_b);
        assert!(a.is_seeded());
    }

    #[test]
    fn entropy_is_the_default() {
        assert!(!RandomSource::default().is_seeded());
        assert!(!RandomSource::from_seed(None).is_seeded());
    }

    #[tokio::test]
    async fn request_now_follows_the_scoped_clock() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::on_date(2024, 6, 10).unwrap());
        let expected = clock.now();
        let seen = scope_request_clock(clock, async { request_now() }).await;
        assert_eq!(seen, expected);
        assert_ne!(request_now(), expected);
    }

    #[test]
    fn round2_truncates_to_cents() {
        assert_eq!(round2(4.23456), 4.23);
        assert_eq!(round2(2.5), 2.5);
    }
}
