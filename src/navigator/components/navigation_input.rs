use crate::event_ext::EventExt;
use crate::history::Route;
use crate::navigator::Message;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::Stylize;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Line where the user types the route to navigate to.
#[derive(Default)]
pub struct NavigationInput {
    pub input: Input,
}

impl NavigationInput {
    fn take_route(&mut self) -> Option<Route> {
        let value = self.input.value().trim();
        if value.is_empty() {
            return None;
        }
        let route = Route::canonical(value);
        self.input.reset();
        Some(route)
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Message> {
        if event.is_enter() {
            return self.take_route().map(Message::Navigate);
        }
        if event.is_replace_entry() {
            return self.take_route().map(Message::ReplaceEntry);
        }
        self.input.handle_event(event);
        None
    }

    pub fn view(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Go to ").cyan().on_black();
        let paragraph = Paragraph::new(format!("> {}", self.input.value()))
            .block(block)
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use crate::history::Route;
    use crate::navigator::components::NavigationInput;
    use crate::navigator::Message;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(sut: &mut NavigationInput, text: &str) {
        for c in text.chars() {
            assert!(sut.handle_event(&key(KeyCode::Char(c))).is_none());
        }
    }

    #[test]
    fn test_enter_navigates_to_typed_route() {
        let mut sut = NavigationInput::default();
        type_text(&mut sut, "/users?page=2");
        match sut.handle_event(&key(KeyCode::Enter)) {
            Some(Message::Navigate(route)) => assert_eq!(Route::from("/users?page=2"), route),
            _ => panic!("expected a navigation"),
        }
        assert_eq!("", sut.input.value());
    }

    #[test]
    fn test_missing_leading_slash_is_added() {
        let mut sut = NavigationInput::default();
        type_text(&mut sut, "login");
        match sut.handle_event(&key(KeyCode::Enter)) {
            Some(Message::Navigate(route)) => assert_eq!(Route::from("/login"), route),
            _ => panic!("expected a navigation"),
        }
    }

    #[test]
    fn test_enter_on_empty_input_does_nothing() {
        let mut sut = NavigationInput::default();
        type_text(&mut sut, "  ");
        assert!(sut.handle_event(&key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_ctrl_r_replaces_with_typed_route() {
        let mut sut = NavigationInput::default();
        type_text(&mut sut, "dashboard?");
        let ctrl_r = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(Some(Message::ReplaceEntry(Route::from("/dashboard"))), sut.handle_event(&ctrl_r));
        assert_eq!("", sut.input.value());
        assert_eq!(None, sut.handle_event(&ctrl_r));
    }
}
