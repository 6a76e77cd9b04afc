pub mod employee;
pub mod lucky_draw;
pub mod state;
pub mod table;

pub use employee::employee_config;
pub use lucky_draw::lucky_draw_config;
pub use state::state_config;
pub use table::table_config;
