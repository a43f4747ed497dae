pub mod ai;
pub mod controller;
pub mod human;

pub use ai::MinimaxAI;
pub use controller::PlayerController;
pub use human::HumanController;
