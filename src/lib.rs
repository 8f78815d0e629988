#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod session;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use element::{Drawable, Sticker, Stroke};
pub use history::DrawingHistory;
pub use input::{InputEvent, InputHandler, PointerLocation};
pub use session::SketchpadSession;
pub use surface::{CanvasSurface, Surface};
pub use tools::ToolState;
