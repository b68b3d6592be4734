pub mod config;

pub mod core {
	pub mod engine;
	pub mod error;
	pub mod game;
	pub mod renderer;
	pub mod terminal;
}

pub mod games;

// Re-export for convenience
pub use crate::core::engine::Engine;
pub use crate::core::game::LineGame;
pub use crate::core::terminal::TerminalContext;
