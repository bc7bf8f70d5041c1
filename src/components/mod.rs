pub mod compare;
pub mod hud;
pub mod widgets;
