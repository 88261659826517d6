use crossterm::event::Event;
use ratatui::Frame;

pub trait Component<M> {

    fn view(&self, frame: &mut Frame);
    fn handle_event(&mut self, event: &Event) -> Option<M>;

}
