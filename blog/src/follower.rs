use std::{cell::RefCell, rc::Rc};

use common::subject_observer::{NotifyResult, Observer, SharedObserver, Subject};
use log::trace;

use crate::{Blog, BlogEvent};

/// Keeps every article it was notified about, in reading order.
pub struct BlogFollower {
    name: String,
    read: RefCell<Vec<String>>,
}

impl BlogFollower {
    pub fn new(name: impl Into<String>) -> Self {
        BlogFollower {
            name: name.into(),
            read: RefCell::new(vec![]),
        }
    }

    /// Builds a follower already registered on `blog`.
    pub fn follow(name: impl Into<String>, blog: &Blog) -> Rc<Self> {
        let follower = Rc::new(Self::new(name));
        blog.register_observer(follower.clone());
        follower
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn read_articles(&self) -> Vec<String> {
        self.read.borrow().clone()
    }

    pub fn as_observer(self: &Rc<Self>) -> SharedObserver<Blog, BlogEvent> {
        self.clone()
    }
}

impl Observer<Blog, BlogEvent> for BlogFollower {
    fn update(&self, source: &Blog, event: BlogEvent) -> NotifyResult {
        if let Some(article) = source.latest_article() {
            trace!("{} reads {event:?}", self.name);
            self.read.borrow_mut().push(article.to_string());
        }
        Ok(())
    }
}
