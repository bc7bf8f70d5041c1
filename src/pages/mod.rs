pub mod sections;
pub mod seminar;
pub mod slides;
