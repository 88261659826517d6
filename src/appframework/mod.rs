mod component;

pub use component::Component;
use ratatui::DefaultTerminal;
use std::io;

pub trait UpdateState<M> {
    fn update(&mut self, message: M) -> Option<M>;
}

pub trait Application<M>: Component<M> + UpdateState<M> {

    fn is_finished(&self) -> bool;

    fn run(&mut self) -> io::Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.clear()?;
        while !self.is_finished() {
            terminal.draw(|frame| {
                self.view(frame);
            })?;
            let event = crossterm::event::read()?;
            if let Some(mut message) = self.handle_event(&event) {
                while let Some(new_message) = self.update(message) {
                    message = new_message;
                }
            }
        }
        Ok(())
    }

}
