pub mod app_state;
pub mod common;
pub mod employee;
pub mod pagination;
pub mod prize;
pub mod table;
pub mod winner;

pub use app_state::*;
pub use common::*;
pub use employee::*;
pub use pagination::*;
pub use prize::*;
pub use table::*;
pub use winner::*;
