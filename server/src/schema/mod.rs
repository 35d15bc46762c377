mod admin_table;
mod animation_state_table;
mod cloud_anchor_table;

pub use admin_table::*;
pub use animation_state_table::*;
pub use cloud_anchor_table::*;
