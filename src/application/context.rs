//! Ports shared by every handler.

use std::sync::Arc;

use crate::ports::{ChatAuthority, EventRepository, OutputGateway, UserRepository};

/// The collaborators a handler may use. Cheap to clone.
#[derive(Clone)]
pub struct BotContext {
    pub users: Arc<dyn UserRepository>,
    pub events: Arc<dyn EventRepository>,
    pub output: Arc<dyn OutputGateway>,
    pub authority: Arc<dyn ChatAuthority>,
}

impl BotContext {
    pub fn new(
        users: Arc<dyn UserRepository>,
        events: Arc<dyn EventRepository>,
        output: Arc<dyn OutputGateway>,
        authority: Arc<dyn ChatAuthority>,
    ) -> Self {
        Self {
            users,
            events,
            output,
            authority,
        }
    }
}
