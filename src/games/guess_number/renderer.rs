/// Guess-the-number renderer, all user-facing text lives here
use std::io::{self, Write};

use crate::config::{SECRET_MAX, SECRET_MIN};
use crate::core::error::InputError;
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};

use super::game::GameState;
use super::outcome::RoundOutcome;

pub const GUESS_PROMPT: &str = "请输入你的猜测: ";
pub const CONTINUE_PROMPT: &str = "是否继续游戏？(y/n): ";
pub const CORRECT_MESSAGE: &str = "恭喜你，猜对了！";
pub const TOO_LOW_MESSAGE: &str = "太小了！";
pub const TOO_HIGH_MESSAGE: &str = "太大了！";
pub const INVALID_MESSAGE: &str = "输入无效，请输入一个整数。";
pub const FAREWELL_MESSAGE: &str = "谢谢参与，再见！";

#[derive(Debug, Default, Clone, Copy)]
pub struct NumberRenderer;

impl NumberRenderer {
    fn feedback(outcome: RoundOutcome) -> (&'static str, TerminalColor) {
        match outcome {
            RoundOutcome::Correct => (CORRECT_MESSAGE, TerminalColor::Green),
            RoundOutcome::TooLow => (TOO_LOW_MESSAGE, TerminalColor::Yellow),
            RoundOutcome::TooHigh => (TOO_HIGH_MESSAGE, TerminalColor::Yellow),
        }
    }
}

impl GameRenderer<GameState> for NumberRenderer {
    fn render_banner<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_colored_line("欢迎来到猜数字游戏！", TerminalColor::Cyan)?;
        ctx.print_line(&format!(
            "我已经想好了一个 {} 到 {} 之间的整数。",
            SECRET_MIN, SECRET_MAX
        ))
    }

    fn render<W: Write>(&self, state: &GameState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        match *state {
            GameState::AwaitGuess => ctx.prompt(GUESS_PROMPT),
            GameState::Feedback(outcome) => {
                let (text, color) = Self::feedback(outcome);
                ctx.print_colored_line(text, color)
            }
            GameState::AwaitContinue => ctx.prompt(CONTINUE_PROMPT),
            GameState::Terminated => ctx.print_line(FAREWELL_MESSAGE),
        }
    }

    fn render_rejected<W: Write>(
        &self,
        _error: &InputError,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()> {
        ctx.print_colored_line(INVALID_MESSAGE, TerminalColor::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::{ResetColor, SetForegroundColor};

    fn rendered(state: GameState) -> String {
        let mut ctx = TerminalContext::new(Vec::new(), false);
        NumberRenderer.render(&state, &mut ctx).unwrap();
        String::from_utf8(ctx.into_inner()).unwrap()
    }

    #[test]
    fn each_outcome_has_its_own_line() {
        assert_eq!(
            rendered(GameState::Feedback(RoundOutcome::Correct)),
            format!("{CORRECT_MESSAGE}\n")
        );
        assert_eq!(
            rendered(GameState::Feedback(RoundOutcome::TooLow)),
            format!("{TOO_LOW_MESSAGE}\n")
        );
        assert_eq!(
            rendered(GameState::Feedback(RoundOutcome::TooHigh)),
            format!("{TOO_HIGH_MESSAGE}\n")
        );
    }

    #[test]
    fn tty_output_colours_feedback_and_rejections() {
        let fg = |color: TerminalColor| SetForegroundColor(color.into()).to_string();
        let reset = ResetColor.to_string();

        let mut ctx = TerminalContext::new(Vec::new(), true);
        NumberRenderer.render_banner(&mut ctx).unwrap();
        for outcome in [RoundOutcome::Correct, RoundOutcome::TooLow, RoundOutcome::TooHigh] {
            NumberRenderer.render(&GameState::Feedback(outcome), &mut ctx).unwrap();
        }
        NumberRenderer
            .render_rejected(&InputError::Empty, &mut ctx)
            .unwrap();
        let out = String::from_utf8(ctx.into_inner()).unwrap();

        assert!(out.starts_with(&fg(TerminalColor::Cyan)), "{out:?}");
        for (text, color) in [
            (CORRECT_MESSAGE, TerminalColor::Green),
            (TOO_LOW_MESSAGE, TerminalColor::Yellow),
            (TOO_HIGH_MESSAGE, TerminalColor::Yellow),
            (INVALID_MESSAGE, TerminalColor::Red),
        ] {
            let wrapped = format!("{}{text}{reset}\n", fg(color));
            assert!(out.contains(&wrapped), "{text} not wrapped in {color:?}: {out:?}");
        }
    }

    #[test]
    fn prompts_stay_on_the_input_line() {
        assert_eq!(rendered(GameState::AwaitGuess), GUESS_PROMPT);
        assert_eq!(rendered(GameState::AwaitContinue), CONTINUE_PROMPT);
    }

    #[test]
    fn banner_mentions_the_range() {
        let mut ctx = TerminalContext::new(Vec::new(), false);
        NumberRenderer.render_banner(&mut ctx).unwrap();
        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert!(out.contains("1 到 10"), "{out}");
    }
}
