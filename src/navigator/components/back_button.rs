use crate::history::{NavigationHistory, OverrideTable, Route};
use log::debug;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::Stylize;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// The application's "Back" control.
pub struct BackButton {
    overrides: OverrideTable,
    fallback: Route,
}

impl BackButton {
    pub fn new(overrides: OverrideTable, fallback: Route) -> Self {
        BackButton {
            overrides,
            fallback,
        }
    }

    pub fn is_enabled(&self, history: &dyn NavigationHistory) -> bool {
        if !history.is_enabled() {
            return false;
        }
        let has_override = history
            .current()
            .is_some_and(|current| self.overrides.contains(&current));
        has_override || history.previous().is_some()
    }

    pub fn activate(&self, history: &mut dyn NavigationHistory) -> Option<Route> {
        let destination = history.go_back(&self.overrides, &self.fallback);
        if destination.is_none() {
            debug!("Back control activated without navigation history");
        }
        destination
    }

    pub fn view(&self, frame: &mut Frame, area: Rect, history: &dyn NavigationHistory) {
        let block = Block::bordered().on_black();
        let label = match history.previous() {
            Some(previous) => format!("◀ Back (Esc) to {previous}"),
            None => "◀ Back (Esc)".to_string(),
        };
        let paragraph = if self.is_enabled(history) {
            Paragraph::new(label).block(block.light_blue()).bold()
        } else {
            Paragraph::new(label).block(block.dark_gray()).dark_gray()
        };
        frame.render_widget(paragraph.alignment(Alignment::Left), area);
    }
}
