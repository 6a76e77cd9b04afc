pub mod lucky_draw_service;
pub mod roster_service;
pub mod seating_service;
pub mod state_store;

pub use lucky_draw_service::LuckyDrawService;
pub use roster_service::RosterService;
pub use seating_service::SeatingService;
pub use state_store::StateStore;
