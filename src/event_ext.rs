use crossterm::event::{Event, KeyCode, KeyModifiers};

pub trait EventExt {

    fn is_enter(&self) -> bool;
    fn is_escape(&self) -> bool;
    fn is_stop(&self) -> bool;
    fn is_native_back(&self) -> bool;
    fn is_drop_entry(&self) -> bool;
    fn is_replace_entry(&self) -> bool;

}

impl EventExt for Event {

    fn is_enter(&self) -> bool {
        match self {
            Event::Key(key_event) => key_event.code == KeyCode::Enter,
            _ => false
        }
    }

    fn is_escape(&self) -> bool {
        match self {
            Event::Key(key_event) => key_event.code == KeyCode::Esc,
            _ => false
        }
    }

    fn is_stop(&self) -> bool {
        is_ctrl(self, 'c')
    }

    fn is_native_back(&self) -> bool {
        is_ctrl(self, 'b')
    }

    fn is_drop_entry(&self) -> bool {
        is_ctrl(self, 'd')
    }

    fn is_replace_entry(&self) -> bool {
        is_ctrl(self, 'r')
    }
}

fn is_ctrl(event: &Event, c: char) -> bool {
    match event {
        Event::Key(key_event) => key_event.code == KeyCode::Char(c) && key_event.modifiers == KeyModifiers::CONTROL,
        _ => false
    }
}
