pub mod camera;
pub mod header;
pub mod popups;
pub mod recommendations;
