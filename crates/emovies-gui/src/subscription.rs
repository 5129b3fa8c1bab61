use iced::window;
use iced::Subscription;
use std::time::Duration;

use emovies_core::config::ThemeMode;

use crate::app::Message;

/// How often the OS appearance is re-read while following the system.
const APPEARANCE_POLL_SECS: u64 = 5;

/// Window geometry events, plus an appearance poll when the theme mode
/// follows the OS.
pub fn subscriptions(mode: ThemeMode) -> Subscription<Message> {
    let window_events = window::events().map(|(_id, event)| Message::WindowEvent(event));

    if mode == ThemeMode::System {
        Subscription::batch([window_events, appearance_tick()])
    } else {
        window_events
    }
}

fn appearance_tick() -> Subscription<Message> {
    iced::time::every(Duration::from_secs(APPEARANCE_POLL_SECS)).map(|_| Message::AppearanceTick)
}
