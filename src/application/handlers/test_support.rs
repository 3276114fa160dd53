//! Fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::{
    InMemoryEventRepository, InMemoryUserRepository, RecordingOutput, StaticChatAuthority,
};
use crate::application::context::BotContext;
use crate::application::message::{Chat, ClickRequest, Message};
use crate::domain::event::Event;
use crate::domain::foundation::{CallbackId, ChatId, EventId, MessageId, UserId};
use crate::domain::user::User;

/// A context backed by in-memory adapters, with handles to inspect them.
pub(crate) struct TestBot {
    pub users: Arc<InMemoryUserRepository>,
    pub events: Arc<InMemoryEventRepository>,
    pub output: Arc<RecordingOutput>,
    pub ctx: BotContext,
}

impl TestBot {
    pub fn new(users: Vec<User>, events: Vec<Event>) -> Self {
        Self::with_admins(users, events, [])
    }

    pub fn with_admins(
        users: Vec<User>,
        events: Vec<Event>,
        admins: impl IntoIterator<Item = UserId>,
    ) -> Self {
        let users = Arc::new(InMemoryUserRepository::with_users(users));
        let events = Arc::new(InMemoryEventRepository::with_events(events));
        let output = Arc::new(RecordingOutput::new());
        let ctx = BotContext::new(
            users.clone(),
            events.clone(),
            output.clone(),
            Arc::new(StaticChatAuthority::new(admins)),
        );
        Self {
            users,
            events,
            output,
            ctx,
        }
    }

    pub fn event(&self, chat: i64) -> Option<Event> {
        self.events.get(EventId::new(chat))
    }

    pub fn user(&self, id: i64) -> User {
        self.users.get(UserId::new(id)).expect("user is stored")
    }

    pub fn write_count(&self) -> usize {
        self.users.write_count() + self.events.write_count()
    }
}

/// A user whose private chat id equals their user id.
pub(crate) fn reachable_user(id: i64, name: &str) -> User {
    let mut user = User::new(UserId::new(id), name);
    user.bind_channel(ChatId::new(id));
    user
}

pub(crate) fn group(id: i64) -> Chat {
    Chat {
        id: ChatId::new(id),
        title: "Office".to_string(),
        private: false,
    }
}

pub(crate) fn private(id: i64) -> Chat {
    Chat {
        id: ChatId::new(id),
        title: "<unknown>".to_string(),
        private: true,
    }
}

pub(crate) fn message(from: &User, chat: Chat, text: &str) -> Message {
    Message {
        from: from.clone(),
        chat,
        text: text.to_string(),
        args: text.split_whitespace().skip(1).map(String::from).collect(),
    }
}

pub(crate) fn click(from: &User, chat: i64) -> ClickRequest {
    ClickRequest {
        id: CallbackId::new("cb-1"),
        from: from.clone(),
        chat: ChatId::new(chat),
        message: MessageId::new(7),
    }
}

/// A registering event in `chat` owned by the first of `members`, with all
/// of them joined. The members' active_events are updated in place.
pub(crate) fn event_with(chat: i64, members: &mut [User]) -> Event {
    let owner = members.first().map(User::id).unwrap_or(UserId::new(0));
    let mut event = Event::new(EventId::new(chat), "Office", owner);
    for member in members.iter_mut() {
        event.toggle_participant(member).expect("event is registering");
    }
    event
}
