use crate::history::Route;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Line, Span, Stylize, Widget};
use ratatui::widgets::{Block, List, ListItem};

/// Renders a history, newest entry first, with the current entry highlighted.
pub struct HistoryList<'a> {
    title: &'a str,
    entries: &'a [Route],
}

impl<'a> HistoryList<'a> {
    pub fn new(title: &'a str, entries: &'a [Route]) -> Self {
        Self { title, entries }
    }
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized
    {
        let block = Block::bordered()
            .on_black()
            .title(Span::from(format!(" {} ({}) ", self.title, self.entries.len())).bold());

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .rev()
            .map(|(index, route)| {
                let line = Line::from(format!("{:>3} {}", index, route));
                if index + 1 == self.entries.len() {
                    ListItem::new(line.bold().reversed())
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
