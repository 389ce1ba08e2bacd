//! Synchronous fan-out of game messages to listeners.

use crate::Board;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, instrument, trace};

/// Receives messages published by a [`NotificationHub`].
pub trait Listener {
    /// Handles one text message.
    fn notify(&mut self, message: &str);

    /// Handles a board snapshot. Ignored unless overridden.
    fn show_board(&mut self, _board: &Board) {}
}

impl<F: FnMut(&str)> Listener for F {
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Token returned by [`NotificationHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered set of listeners.
///
/// Delivery is synchronous and in subscription order. A panicking
/// listener is not caught.
#[derive(Default)]
pub struct NotificationHub {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Box<dyn Listener>)>,
}

impl NotificationHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener at the end of the delivery order.
    #[instrument(skip(self, listener), fields(count = self.listeners.len()))]
    pub fn subscribe(&mut self, listener: impl Listener + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(?id, "Listener subscribed");
        id
    }

    /// Removes a listener. Returns false if `id` was not subscribed.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Delivers `message` to every listener.
    pub fn publish(&mut self, message: &str) {
        trace!(message, listeners = self.listeners.len(), "Publishing");
        for (_, listener) in &mut self.listeners {
            listener.notify(message);
        }
    }

    /// Delivers a board snapshot to every listener.
    pub fn publish_board(&mut self, board: &Board) {
        for (_, listener) in &mut self.listeners {
            listener.show_board(board);
        }
    }

    /// Number of subscribed listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True when nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Listener that records every message; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Rc<RefCell<Vec<String>>>,
    boards: Rc<RefCell<Vec<String>>>,
}

impl MessageLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Rendered boards received so far.
    pub fn boards(&self) -> Vec<String> {
        self.boards.borrow().clone()
    }
}

impl Listener for MessageLog {
    fn notify(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn show_board(&mut self, board: &Board) {
        self.boards.borrow_mut().push(board.render());
    }
}
