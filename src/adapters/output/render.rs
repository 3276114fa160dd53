//! Plain-text rendering of outbound messages.

use crate::domain::event::Event;
use crate::domain::foundation::{EventState, UserError};
use crate::domain::user::User;
use crate::ports::{ClickResponse, EventStatus, InfoNotice, TOGGLE_PAYLOAD};

/// Marker shown next to participants the bot cannot reach.
const UNREACHABLE_MARK: &str = "\u{1F6AB}";

/// An inline button under a message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Button {
    pub text: String,
    pub data: String,
}

pub fn error_text(error: UserError) -> String {
    match error {
        UserError::InternalError => "Sorry, looks like the bot is sick, please try later.".into(),
        UserError::AlreadyHasEvent => "This group already has a Secret Santa event.".into(),
        UserError::NoEvent => {
            "This group doesn't have an active event. You can create one with /create".into()
        }
        UserError::PermissionDenied => "You are not permitted to execute this operation.".into(),
        UserError::EventIsNotLaunched => "Event isn't launched, use /cancel to remove it.".into(),
        UserError::EventAlreadyLaunched => "Event is already launched.".into(),
        UserError::NotEnoughUsers => "Event must have at least 2 participants.".into(),
        UserError::NotAuthorizedUser => [
            "I can't write to some of the participants.",
            "Please ask them to send me a private message and try again.",
        ]
        .join(" "),
        UserError::NotPrivateChat => "This command is available only in a private chat with me.".into(),
        UserError::ArgumentExpected => "This command needs arguments, e.g. /set_budget 20 EUR".into(),
    }
}

pub fn info_text(info: InfoNotice) -> String {
    match info {
        InfoNotice::Help => help_text(),
        InfoNotice::EventLaunched => {
            "Event has launched! Check your private messages to see your target!".into()
        }
        InfoNotice::EventCanceled => {
            "Event has been canceled! Now you can /create a new event in this chat!".into()
        }
        InfoNotice::EventFinished => {
            "Event has finished, I hope it was fun! Now you can /create a new event in this chat!"
                .into()
        }
        InfoNotice::WaitingForWishlist => "Please send a text message with your wishlist!".into(),
        InfoNotice::WishlistUpdated => {
            "Your wishlist has been updated! It will be visible to your Secret Santa!".into()
        }
        InfoNotice::WishlistReset => "Your wishlist has been deleted!".into(),
        InfoNotice::BudgetUpdated => "Event budget has been updated!".into(),
    }
}

fn help_text() -> String {
    [
        "Hi, I'm a Secret Santa Bot and I help people organize gift exchanges.",
        "",
        "If you are a participant: just relax, I will send you all important information later.",
        "You can add your /wishlist to help your Secret Santa choose a present, \
         see it with /get_wishlist and remove it with /reset_wishlist.",
        "",
        "If you want to organize an event: add me to a group with the participants and type /create there.",
        "When everybody has joined, type /launch to assign a target to each participant.",
        "",
        "Other useful commands:",
        "/status - see the latest state of the event.",
        "/set_budget <text> - set the gift budget.",
        "/cancel - cancel the event (participants will be notified).",
        "/finish - end a past event so a new one can be created.",
    ]
    .join("\n")
}

pub fn click_text(response: ClickResponse) -> String {
    match response {
        ClickResponse::InternalError => "Internal error, cannot process your request.".into(),
        ClickResponse::AlreadyLaunched => {
            "Sorry, the event is already launched. You cannot join or leave it.".into()
        }
        ClickResponse::EventJoined => "You have joined the event.".into(),
        ClickResponse::EventLeft => "You have left the event.".into(),
        ClickResponse::EventCanceled => "This event was canceled.".into(),
    }
}

pub fn event_status_text(status: &EventStatus) -> String {
    let state = match status.event.state() {
        EventState::Registering => "Registering",
        EventState::Launched => "Launched",
    };

    let mut lines = vec![
        "Secret Santa Event".to_string(),
        String::new(),
        format!("Owner: {}", status.owner.name()),
        format!("Status: {}", state),
    ];
    if let Some(budget) = status.event.budget() {
        lines.push(format!("Budget: {}", budget));
    }
    lines.push(String::new());
    lines.push("Participants:".to_string());

    if status.participants.is_empty() {
        lines.push("Currently there are no participants :(".to_string());
    }
    for (index, user) in status.participants.iter().enumerate() {
        let mark = if user.is_reachable() {
            String::new()
        } else {
            format!(" {}", UNREACHABLE_MARK)
        };
        lines.push(format!("{}. {}{}", index + 1, user.name(), mark));
    }

    if status.unreachable().next().is_some() {
        lines.push(String::new());
        lines.push(format!(
            "Users with {} should write a message to me to allow notifications. \
             Until then the event can't be launched.",
            UNREACHABLE_MARK
        ));
    }

    lines.join("\n")
}

pub fn event_buttons(status: &EventStatus) -> Vec<Button> {
    if status.event.is_launched() {
        return Vec::new();
    }
    vec![Button {
        text: "Join/Leave".to_string(),
        data: TOGGLE_PAYLOAD.to_string(),
    }]
}

pub fn target_text(event: &Event, target: &User) -> String {
    let mut lines = vec![
        format!("Secret Santa event in {} has been launched.", event.name()),
        format!("You should prepare a present for {}.", target.name()),
    ];
    if let Some(budget) = event.budget() {
        lines.push(format!("Budget: {}", budget));
    }
    lines.push(String::new());
    match target.wishlist() {
        Some(wishlist) => {
            lines.push(format!("Wishlist of {}:", target.name()));
            lines.push(wishlist.to_string());
        }
        None => lines.push("Unfortunately this person doesn't have a wishlist!".to_string()),
    }
    lines.join("\n")
}

pub fn cancellation_text(event: &Event) -> String {
    format!(
        "Secret Santa event has been canceled in group {}.\nIgnore all previous messages regarding this group.",
        event.name()
    )
}

pub fn wishlist_text(user: &User) -> String {
    match user.wishlist() {
        Some(wishlist) => format!("Your wishlist:\n{}", wishlist),
        None => "You don't have a wishlist yet. Send /wishlist to add one.".to_string(),
    }
}

pub fn wishlist_update_text(target: &User) -> String {
    match target.wishlist() {
        Some(wishlist) => format!("{} has updated their wishlist:\n{}", target.name(), wishlist),
        None => format!("{} has deleted their wishlist.", target.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ChatId, EventId, UserId};

    fn status(launched: bool) -> EventStatus {
        let mut owner = User::new(UserId::new(13), "Ada");
        owner.bind_channel(ChatId::new(13));
        let guest = User::new(UserId::new(14), "Bob");
        let mut event = Event::new(EventId::new(42), "Office", UserId::new(13));
        if launched {
            event.set_state(EventState::Launched);
        }
        EventStatus {
            event,
            owner: owner.clone(),
            participants: vec![owner, guest],
        }
    }

    #[test]
    fn status_marks_unreachable_participants() {
        let text = event_status_text(&status(false));
        assert!(text.contains("Owner: Ada"));
        assert!(text.contains("1. Ada\n"));
        assert!(text.contains(&format!("2. Bob {}", UNREACHABLE_MARK)));
        assert!(text.contains("can't be launched"));
    }

    #[test]
    fn button_is_shown_only_while_registering() {
        assert_eq!(event_buttons(&status(false)).len(), 1);
        assert_eq!(event_buttons(&status(false))[0].data, TOGGLE_PAYLOAD);
        assert!(event_buttons(&status(true)).is_empty());
    }

    #[test]
    fn target_text_mentions_missing_wishlist() {
        let event = Event::new(EventId::new(42), "Office", UserId::new(13));
        let target = User::new(UserId::new(14), "Bob");
        let text = target_text(&event, &target);
        assert!(text.contains("present for Bob"));
        assert!(text.contains("doesn't have a wishlist"));
    }
}
