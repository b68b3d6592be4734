/// Generic game renderer trait for dependency injection
use crate::core::error::InputError;
use crate::core::terminal::TerminalContext;
use std::io::{self, Write};

pub trait GameRenderer<State> {
    /// Shown once before the first state is rendered
    fn render_banner<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    /// Render the state the game just entered
    fn render<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    /// Tell the user a line was not accepted
    fn render_rejected<W: Write>(
        &self,
        error: &InputError,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()>;
}
