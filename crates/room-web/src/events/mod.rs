mod controls;
mod pointer;

pub use controls::{sync_rotate_button, wire_view_buttons};
pub use pointer::{wire_input_handlers, InputWiring};
