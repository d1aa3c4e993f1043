use std::sync::Mutex;

/// Sink for user-facing notifications
pub trait MessageCenter: Send + Sync {
    fn push_info(&self, message: String);

    fn push_error(&self, message: String);
}

/// Forwards notifications to the log
#[derive(Debug, Default)]
pub struct TracingMessageCenter;

impl MessageCenter for TracingMessageCenter {
    fn push_info(&self, message: String) {
        tracing::info!(target: "message_center", "{message}");
    }

    fn push_error(&self, message: String) {
        tracing::error!(target: "message_center", "{message}");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

/// Queues notifications until the UI drains them
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<Message>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Message> {
        match self.messages.lock() {
            Ok(mut messages) => messages.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    fn push(&self, level: Level, text: String) {
        let mut messages = match self.messages.lock() {
            Ok(messages) => messages,
            Err(poisoned) => poisoned.into_inner(),
        };
        messages.push(Message { level, text });
    }
}

impl MessageCenter for MessageLog {
    fn push_info(&self, message: String) {
        self.push(Level::Info, message);
    }

    fn push_error(&self, message: String) {
        self.push(Level::Error, message);
    }
}

impl<M: MessageCenter + ?Sized> MessageCenter for std::sync::Arc<M> {
    fn push_info(&self, message: String) {
        (**self).push_info(message);
    }

    fn push_error(&self, message: String) {
        (**self).push_error(message);
    }
}
