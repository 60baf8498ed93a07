pub mod app;
pub mod camera;
pub mod cell;
pub mod config;
pub mod events;
pub mod io;
pub mod life;
pub mod pattern;
pub mod render;
pub mod view;

pub use cell::Cell;
pub use cell::LiveSet;
pub use life::Life;
pub use view::Pixel;
pub use view::ViewState;
