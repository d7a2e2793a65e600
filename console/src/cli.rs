use std::io::{BufRead, Write};

use anyhow::Context;
use colored::Colorize;
use libgame::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Died,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        if line.trim_start().starts_with('q') {
            Command::Quit
        } else {
            Command::Next
        }
    }
}

/// Shows the world and advances it once per input line until the user quits, input runs out or every cell is dead.
pub fn run<I, O>(
    game: &mut Game,
    mut alive_cells: usize,
    input: I,
    output: &mut O,
) -> anyhow::Result<Outcome>
where
    I: BufRead,
    O: Write,
{
    let mut lines = input.lines();

    loop {
        game.render(output).context("Couldn't render world")?;
        writeln!(
            output,
            "{} Press enter for next version of the world or 'q' followed by enter to exit",
            format!("({alive_cells} live cells)").cyan()
        )?;
        output.flush()?;

        let Some(line_res) = lines.next() else {
            return Ok(Outcome::Quit);
        };
        let line = line_res.context("Couldn't read input")?;

        match Command::parse(&line) {
            Command::Quit => return Ok(Outcome::Quit),

            Command::Next => {
                alive_cells = game.step();

                if alive_cells == 0 {
                    writeln!(output, "{}", "The world died, no live cells anymore!".red())?;
                    return Ok(Outcome::Died);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use libgame::board::GameBoard;

    use super::*;

    fn play(board: &str, input: &str) -> (Outcome, String) {
        let board: GameBoard = board.parse().unwrap();
        let mut game = Game::from_board(board);
        let alive_cells = game.live_count();
        let mut output = Vec::new();

        let outcome = run(&mut game, alive_cells, Cursor::new(input), &mut output).unwrap();

        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn lines_starting_with_q_quit() {
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("  quit"), Command::Quit);
        assert_eq!(Command::parse(""), Command::Next);
        assert_eq!(Command::parse("next"), Command::Next);
    }

    #[test]
    fn quitting_shows_the_world_and_its_live_count_first() {
        let (outcome, output) = play("----\n-OO-\n-OO-\n----\n", "q\n");

        assert_eq!(outcome, Outcome::Quit);
        assert!(output.starts_with("----\n-OO-\n-OO-\n----\n"), "{output}");
        assert!(output.contains("(4 live cells)"), "{output}");
        assert!(!output.contains("died"), "{output}");
    }

    #[test]
    fn each_empty_line_advances_one_generation() {
        let (outcome, output) = play("---\nOOO\n---\n", "\n\nq\n");

        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(output.matches("-O-\n-O-\n-O-\n").count(), 1, "{output}");
        assert_eq!(output.matches("---\nOOO\n---\n").count(), 2, "{output}");
        assert_eq!(output.matches("(3 live cells)").count(), 3, "{output}");
    }

    #[test]
    fn a_dying_world_ends_the_run() {
        let (outcome, output) = play("---\n-O-\n---\n", "\n\n\n");

        assert_eq!(outcome, Outcome::Died);
        assert!(output.contains("The world died, no live cells anymore!"), "{output}");
        assert_eq!(output.matches("(1 live cells)").count(), 1, "{output}");
    }

    #[test]
    fn running_out_of_input_quits() {
        let (outcome, output) = play("OO\nOO\n", "");

        assert_eq!(outcome, Outcome::Quit);
        assert!(output.contains("(4 live cells)"), "{output}");
    }
}
