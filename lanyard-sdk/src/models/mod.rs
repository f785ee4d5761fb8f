pub mod presence;
pub mod render_state;
