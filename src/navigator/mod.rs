use crate::appframework::{Application, Component, UpdateState};
use crate::config::HistoryConfig;
use crate::event_ext::EventExt;
use crate::history::{NavigationHistory, Route};
use crate::navigator::components::{BackButton, NavigationInput};
use crate::navigator::widgets::HistoryList;
use crate::router::{MemoryRouter, NavigateOptions, RouterHandle};
use crossterm::event::Event;
use log::info;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Line, Span, Stylize};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use std::rc::Rc;

pub mod components;
mod widgets;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Message {
    Navigate(Route),
    Back,
    NativeBack,
    /// Forgets the current entry without moving the router.
    DropEntry,
    ReplaceEntry(Route),
    Quit,
}

pub struct Navigator {
    router: Rc<MemoryRouter>,
    history: Box<dyn NavigationHistory>,
    back_button: BackButton,
    input: NavigationInput,
    is_finished: bool,
}

impl Navigator {
    pub fn new(
        router: Rc<MemoryRouter>,
        history: Box<dyn NavigationHistory>,
        config: &HistoryConfig,
    ) -> Self {
        Navigator {
            router,
            history,
            back_button: BackButton::new(config.overrides.clone(), config.fallback.clone()),
            input: NavigationInput::default(),
            is_finished: false,
        }
    }

    fn view_location(&self, frame: &mut Frame, area: Rect) {
        let location = self.router.location();
        let status = if self.history.is_enabled() {
            Span::from(" app history on ").black().on_green()
        } else {
            Span::from(" app history off ").black().on_red()
        };
        let line = Line::from(vec![
            Span::from(location.pathname).bold(),
            Span::from(location.search).yellow(),
            Span::from(location.hash).magenta(),
            Span::from("  "),
            status,
        ]);
        let paragraph = Paragraph::new(line).block(Block::bordered().title(" Location ").on_black());
        frame.render_widget(paragraph, area);
    }

    fn view_hints(&self, frame: &mut Frame, area: Rect) {
        let native_back = if self.router.can_go_back() {
            Span::from(" Ctrl + B ").bold().reversed()
        } else {
            Span::from(" Ctrl + B ").dark_gray().reversed()
        };
        let hints = Line::from(vec![
            Span::from(" ⏎ ").bold().reversed(),
            Span::from(" Navigate  "),
            Span::from(" Esc ").bold().reversed(),
            Span::from(" Back  "),
            native_back,
            Span::from(" Native back  "),
            Span::from(" Ctrl + D ").bold().reversed(),
            Span::from(" Drop entry  "),
            Span::from(" Ctrl + R ").bold().reversed(),
            Span::from(" Replace entry  "),
            Span::from(" Ctrl + C ").bold().reversed(),
            Span::from(" Quit"),
        ]);
        frame.render_widget(Paragraph::new(hints), area);
    }
}

impl Component<Message> for Navigator {
    fn view(&self, frame: &mut Frame) {
        let [location_area, body_area, back_area, input_area, hints_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [native_area, app_area] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(body_area);

        self.view_location(frame, location_area);
        let native_entries = self.router.native_entries();
        frame.render_widget(HistoryList::new("Native history", &native_entries), native_area);
        frame.render_widget(HistoryList::new("App history", self.history.entries()), app_area);
        self.back_button.view(frame, back_area, self.history.as_ref());
        self.input.view(frame, input_area);
        self.view_hints(frame, hints_area);
    }

    fn handle_event(&mut self, event: &Event) -> Option<Message> {
        if event.is_stop() {
            return Some(Message::Quit);
        }
        if event.is_escape() {
            return Some(Message::Back);
        }
        if event.is_native_back() {
            return Some(Message::NativeBack);
        }
        if event.is_drop_entry() {
            return Some(Message::DropEntry);
        }
        self.input.handle_event(event)
    }
}

impl UpdateState<Message> for Navigator {
    fn update(&mut self, message: Message) -> Option<Message> {
        match message {
            Message::Navigate(route) => {
                info!("Navigating to '{}'", route);
                self.router.navigate(&route, NavigateOptions::default());
            }
            Message::Back => {
                self.back_button.activate(self.history.as_mut());
            }
            Message::NativeBack => self.router.back(),
            Message::DropEntry => self.history.pop(),
            Message::ReplaceEntry(route) => {
                info!("Replacing current entry with '{}'", route);
                self.history.replace_top(route.clone());
                self.router.navigate(&route, NavigateOptions::replace());
            }
            Message::Quit => self.is_finished = true,
        }
        self.history.sync();
        None
    }
}

impl Application<Message> for Navigator {
    fn is_finished(&self) -> bool {
        self.is_finished
    }
}
