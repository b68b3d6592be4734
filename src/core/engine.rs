use crate::core::game::LineGame;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::TerminalContext;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Blocking render/read loop. Renders after every transition and reads one
/// line whenever the game waits for input, until the game finishes.
pub struct Engine<G: LineGame, R: GameRenderer<G::State>> {
    game: G,
    renderer: R,
}

impl<G: LineGame, R: GameRenderer<G::State>> Engine<G, R> {
    pub fn new(game: G, renderer: R) -> Self {
        Self { game, renderer }
    }

    /// Runs the game to its terminal state and hands the finished game back.
    pub fn run<I: BufRead, W: Write>(
        mut self,
        mut input: I,
        ctx: &mut TerminalContext<W>,
    ) -> Result<G> {
        self.renderer
            .render_banner(ctx)
            .context("failed to write banner")?;

        let mut buf = Vec::new();
        loop {
            self.renderer
                .render(self.game.state(), ctx)
                .context("failed to write to terminal")?;

            if self.game.is_finished() {
                break;
            }

            if !self.game.awaits_input() {
                self.game.advance();
                continue;
            }

            // Lines that are not UTF-8 are decoded lossily and left to the game to reject
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("failed to read from stdin")?;
            if read == 0 {
                debug!("input closed");
                // the prompt is still on the current line
                ctx.empty_line().context("failed to write to terminal")?;
                self.game.handle_eof();
                continue;
            }

            let line = String::from_utf8_lossy(&buf);
            match self.game.parse_line(&line) {
                Ok(parsed) => self.game.handle_input(parsed),
                Err(error) => {
                    debug!(%error, "rejected input line");
                    self.game.handle_rejected(&error);
                    self.renderer
                        .render_rejected(&error, ctx)
                        .context("failed to write to terminal")?;
                }
            }
        }

        ctx.flush().context("failed to flush terminal")?;
        Ok(self.game)
    }
}
