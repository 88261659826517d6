mod back_button;
mod navigation_input;

pub use back_button::BackButton;
pub use navigation_input::NavigationInput;
