use std::{cell::RefCell, fmt::Debug, io, rc::Rc};

use log::{debug, trace};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObserverError {
    #[error("Notification rejected: {0}")]
    Rejected(String),
    #[error("Unable to output notification: {0}")]
    Output(#[from] io::Error),
}

pub type NotifyResult = Result<(), ObserverError>;

/// Receives the subject itself on each notification and pulls the state it needs.
pub trait Observer<S: ?Sized, E> {
    fn update(&self, source: &S, event: E) -> NotifyResult;
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

pub trait Subject<E: Clone> {
    fn register_observer(&self, observer: SharedObserver<Self, E>);
    fn unregister_observer(&self, observer: &SharedObserver<Self, E>);
    fn notify_observers(&self, event: E) -> NotifyResult;
}

/// Ordered observer storage backing a [`Subject`] implementation.
///
/// Duplicates are kept: an observer registered twice is notified twice per
/// broadcast. Every broadcast iterates a snapshot taken when it starts, so
/// observers may register or unregister (themselves included) while being
/// notified; the change applies from the next broadcast.
pub struct ObserverList<S: ?Sized, E> {
    observers: RefCell<Vec<SharedObserver<S, E>>>,
}

impl<S: ?Sized, E> Default for ObserverList<S, E> {
    fn default() -> Self {
        ObserverList {
            observers: RefCell::new(vec![]),
        }
    }
}

impl<S: ?Sized, E> ObserverList<S, E>
where
    E: Clone + Debug,
{
    pub fn push(&self, observer: SharedObserver<S, E>) {
        let mut observers = self.observers.borrow_mut();
        observers.push(observer);
        debug!("Observer registered at position {}", observers.len());
    }

    /// Removes the first occurrence of `observer`, compared by pointer.
    /// Unknown observers are ignored.
    pub fn remove_first(&self, observer: &SharedObserver<S, E>) -> bool {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|obs| Rc::ptr_eq(obs, observer)) {
            Some(index) => {
                observers.remove(index);
                debug!("Observer unregistered from position {}", index + 1);
                true
            }
            None => {
                debug!("Ignoring unregistration of an unknown observer");
                false
            }
        }
    }

    pub fn contains(&self, observer: &SharedObserver<S, E>) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|obs| Rc::ptr_eq(obs, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    pub fn snapshot(&self) -> Vec<SharedObserver<S, E>> {
        self.observers.borrow().clone()
    }

    /// Notifies observers in registration order. The first error is returned
    /// as-is and the observers after the failing one are skipped.
    pub fn notify(&self, source: &S, event: E) -> NotifyResult {
        let observers = self.snapshot();
        let count = observers.len();
        for (index, observer) in observers.iter().enumerate() {
            trace!("Notifying observer {}/{count} of {event:?}", index + 1);
            if let Err(err) = observer.update(source, event.clone()) {
                debug!(
                    "Broadcast of {event:?} aborted at observer {}/{count}: {err}",
                    index + 1
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
