#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod pen;
pub mod renderer;
pub mod session;
pub mod sticker;
pub mod stroke;
pub mod surface;

pub use app::SketchApp;
pub use catalog::StickerCatalog;
pub use command::{Command, CommandHistory};
pub use config::{ExportConfig, SketchConfig};
pub use error::{SketchError, SketchResult};
pub use event::{EventHandler, SketchEvent};
pub use input::{InputEvent, InputHandler};
pub use pen::{Pen, Tool};
pub use renderer::{render_committed, render_scene, CanvasRenderer};
pub use session::Session;
pub use sticker::StickerPlacement;
pub use stroke::Stroke;
