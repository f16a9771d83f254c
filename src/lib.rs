pub mod app;
pub mod detector;
pub mod links;
pub mod overlay;
pub mod recommend;
pub mod ui;
