mod click_event;

pub use click_event::*;
