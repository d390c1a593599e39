//! Typed page-wide notifications.

use std::collections::VecDeque;

use crate::model::{Locale, Theme};

/// A broadcast observed by zero or more subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The active locale was set (also sent when re-selecting the same one).
    LanguageChanged { locale: Locale },
    /// The active theme was set.
    ThemeChanged { theme: Theme },
    /// A guarded field's count was recomputed.
    CharLimitUpdate {
        field: String,
        current_length: usize,
        max_length: usize,
        remaining: i64,
    },
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Notification)>;

/// Fire-and-forget publish/subscribe queue.
///
/// Publishing only enqueues. The owner drains the queue once the current
/// handler has finished, so a publisher never runs subscriber code.
#[derive(Default)]
pub struct EventBus {
    queue: VecDeque<Notification>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    /// Takes the oldest undelivered notification.
    pub fn next(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&Notification) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Hands `notification` to every external subscriber, in subscription order.
    pub fn deliver(&mut self, notification: &Notification) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(notification);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queue", &self.queue)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
