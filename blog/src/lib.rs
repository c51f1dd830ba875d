mod follower;

pub use follower::BlogFollower;

use common::subject_observer::{NotifyResult, ObserverList, SharedObserver, Subject};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogEvent {
    ArticlePublished { index: usize },
}

#[derive(Default)]
pub struct Blog {
    observers: ObserverList<Self, BlogEvent>,
    articles: Vec<String>,
}

impl Subject<BlogEvent> for Blog {
    fn register_observer(&self, observer: SharedObserver<Self, BlogEvent>) {
        self.observers.push(observer);
    }

    fn unregister_observer(&self, observer: &SharedObserver<Self, BlogEvent>) {
        self.observers.remove_first(observer);
    }

    fn notify_observers(&self, event: BlogEvent) -> NotifyResult {
        self.observers.notify(self, event)
    }
}

impl Blog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_article(&mut self, article: impl Into<String>) -> NotifyResult {
        self.articles.push(article.into());
        let index = self.articles.len() - 1;
        debug!("Publishing article #{index}");
        self.notify_observers(BlogEvent::ArticlePublished { index })
    }

    pub fn latest_article(&self) -> Option<&str> {
        self.articles.last().map(String::as_str)
    }

    pub fn articles(&self) -> &[String] {
        &self.articles
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
