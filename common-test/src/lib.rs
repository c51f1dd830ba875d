use std::{
    cell::{Cell, RefCell},
    env,
    fmt::Debug,
    rc::Rc,
    sync::OnceLock,
};

use common::subject_observer::{NotifyResult, Observer, ObserverError};
use rand::{random, rngs::StdRng, SeedableRng};

pub const TEST_SEED_ENV: &str = "TEST_SEED";

static SEED: OnceLock<u64> = OnceLock::new();

fn resolve_seed(var: Option<String>) -> u64 {
    var.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(random)
}

/// Seed shared by every seeded RNG of the test binary, printed once so a
/// failing run can be replayed with `TEST_SEED=<seed>`.
pub fn test_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = resolve_seed(env::var(TEST_SEED_ENV).ok());
        println!("Using seed {seed} ({TEST_SEED_ENV})");
        seed
    })
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(test_seed())
}

/// Shared record of `(label, event)` deliveries, in delivery order.
pub type Journal<E> = Rc<RefCell<Vec<(&'static str, E)>>>;

pub fn journal<E>() -> Journal<E> {
    Rc::new(RefCell::new(vec![]))
}

/// Observer writing every delivery to a [`Journal`], optionally rejecting
/// its n-th call (1-based) without recording it.
pub struct RecordingObserver<E> {
    label: &'static str,
    journal: Journal<E>,
    calls: Cell<usize>,
    fail_on_call: Option<usize>,
}

impl<E> RecordingObserver<E> {
    pub fn new(label: &'static str, journal: &Journal<E>) -> Self {
        RecordingObserver {
            label,
            journal: journal.clone(),
            calls: Cell::new(0),
            fail_on_call: None,
        }
    }

    pub fn failing_on_call(label: &'static str, journal: &Journal<E>, call: usize) -> Self {
        RecordingObserver {
            fail_on_call: Some(call),
            ..Self::new(label, journal)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<S: ?Sized, E: Debug> Observer<S, E> for RecordingObserver<E> {
    fn update(&self, _: &S, event: E) -> NotifyResult {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if self.fail_on_call == Some(call) {
            return Err(ObserverError::Rejected(format!(
                "{} rejected call {call} ({event:?})",
                self.label
            )));
        }
        self.journal.borrow_mut().push((self.label, event));
        Ok(())
    }
}

/// Labels of a journal, in delivery order.
pub fn labels<E>(journal: &Journal<E>) -> Vec<&'static str> {
    journal.borrow().iter().map(|(label, _)| *label).collect()
}

#[cfg(test)]
mod tests {
    use common::subject_observer::{Observer, ObserverError};

    use super::{journal, labels, resolve_seed, test_seed, RecordingObserver};

    #[test]
    fn test_resolve_seed() {
        assert_eq!(42, resolve_seed(Some("42".to_string())));
        // Invalid or missing values fall back to a random seed without failing
        resolve_seed(Some("invalid".to_string()));
        resolve_seed(None);
    }

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(test_seed(), test_seed());
    }

    #[test]
    fn test_recording_observer_fails_on_requested_call() {
        // Given
        let journal = journal();
        let observer = RecordingObserver::failing_on_call("rec", &journal, 2);

        // When
        let first = Observer::<(), u8>::update(&observer, &(), 1);
        let second = Observer::<(), u8>::update(&observer, &(), 2);
        let third = Observer::<(), u8>::update(&observer, &(), 3);

        // Then
        assert!(matches!(first, Ok(())));
        assert!(matches!(second, Err(ObserverError::Rejected(_))));
        assert!(matches!(third, Ok(())));
        assert_eq!(3, observer.calls());
        assert_eq!(vec![("rec", 1), ("rec", 3)], *journal.borrow());
        assert_eq!(vec!["rec", "rec"], labels(&journal));
    }
}
