//! Terminal front end for a session: reads answers from a line reader and
//! prints session events with crossterm styling.

use std::io::{BufRead, Write};

use crossterm::style::Stylize;

use mathterm_core::{
    AnswerSource, Expression, GameMode, Outcome, Profile, Question, QuizError, QuizResult, Reply,
    SessionEvent, SessionObserver, STOP_SENTINEL,
};

/// Reads one line per scalar question, two per matrix question.
pub struct LineAnswers<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> LineAnswers<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }

    fn ask(&mut self, label: &str) -> QuizResult<String> {
        write!(self.prompt, "{label}")?;
        self.prompt.flush()?;
        read_line(&mut self.input)?.ok_or(QuizError::InputClosed)
    }
}

impl<R: BufRead, W: Write> AnswerSource for LineAnswers<R, W> {
    fn answer(&mut self, expression: &Expression) -> QuizResult<Reply> {
        match expression.question() {
            Question::Text(text) => Ok(Reply::Line(self.ask(&format!("Q: {text} = ? "))?)),
            Question::Matrix { .. } => {
                let first = self.ask("1st row: ")?;
                let second = self.ask("2nd row: ")?;
                Ok(Reply::Rows([first, second]))
            }
        }
    }
}

/// Read one line without its terminator. `None` at end of input.
pub fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prints session events. Write failures are ignored; output is display only.
pub struct ConsoleObserver<W> {
    out: W,
    mode: Option<GameMode>,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, mode: None }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &SessionEvent) -> std::io::Result<()> {
        let out = &mut self.out;
        match event {
            SessionEvent::Started { mode } => {
                self.mode = Some(*mode);
                writeln!(out)?;
                let title = format!("--- {} Mode ---", mode.label());
                writeln!(out, "{}", title.yellow().bold())?;
                match mode {
                    GameMode::Timed => writeln!(out, "Timed challenge! The clock is running.")?,
                    GameMode::Survival => writeln!(
                        out,
                        "Difficulty increases every 3 correct answers. One mistake and it's over!"
                    )?,
                    _ => writeln!(out, "Type '{}' to quit.", STOP_SENTINEL.red().bold())?,
                }
            }
            SessionEvent::Question {
                expression, score, ..
            } => match self.mode {
                Some(GameMode::Timed) => {
                    write!(out, "({}) ", expression.tier().label().cyan())?;
                }
                Some(GameMode::Survival) => {
                    writeln!(
                        out,
                        "Score: {} | Level: {}",
                        score.to_string().green().bold(),
                        expression.tier().label().yellow().bold()
                    )?;
                }
                _ => {
                    if let Question::Matrix { .. } = expression.question() {
                        writeln!(out, "Solve:\n\n{}\n", expression.question())?;
                    }
                }
            },
            SessionEvent::Answered {
                outcome: Outcome::Correct,
                points,
                streak,
                ..
            } => {
                if self.mode == Some(GameMode::Survival) {
                    writeln!(out, "{}\n", format!("Correct! Streak: {streak}").green().bold())?;
                } else {
                    writeln!(out, "{} +{points} pts\n", "Correct!".green())?;
                }
            }
            SessionEvent::Answered {
                outcome: Outcome::Incorrect,
                expected,
                ..
            } => {
                if self.mode != Some(GameMode::Survival) {
                    writeln!(out, "{} Answer was {expected}\n", "Incorrect.".red())?;
                }
            }
            SessionEvent::Malformed { error, fatal } => {
                if *fatal {
                    writeln!(out, "{} {error}", "Invalid input.".red().bold())?;
                } else {
                    writeln!(out, "{} {error}\n", "Invalid input.".red())?;
                }
            }
            SessionEvent::LevelUp { next, .. } => {
                let msg = format!("LEVEL UP! Next level: {}", next.label());
                writeln!(out, "{}", msg.yellow().bold())?;
            }
            SessionEvent::TimeUp { score } => {
                writeln!(out, "\n{} Final score: {score}", "Time's up!".red().bold())?;
            }
            SessionEvent::GameOver { score, expected } => {
                writeln!(
                    out,
                    "\n{} The correct answer was {}.",
                    "GAME OVER.".red().bold(),
                    expected.to_string().yellow().bold()
                )?;
                writeln!(
                    out,
                    "You achieved a final score of {} in Survival Mode!",
                    score.to_string().green().bold()
                )?;
            }
            SessionEvent::Finished(result) => {
                writeln!(
                    out,
                    "\nSession over: score {} ({} correct / {} incorrect)",
                    result.score.to_string().bold(),
                    result.correct.to_string().green(),
                    result.incorrect.to_string().red()
                )?;
            }
        }
        out.flush()
    }
}

impl<W: Write> SessionObserver for ConsoleObserver<W> {
    fn notify(&mut self, event: &SessionEvent) {
        let _ = self.render(event);
    }
}

/// Player info block shown above menus and by `mathterm stats`.
pub fn print_header(profile: &Profile) {
    let label = |s: &str| format!("{s:<14}").cyan().bold();
    println!("{}", "Player Info".bold().green());
    println!("  {}{}", label("Username:"), profile.username);
    println!("  {}{}", label("Rank:"), profile.rank);
    println!("  {}{}", label("Score:"), group_thousands(profile.total_score));
    println!(
        "  {}{} / {}",
        label("Success/Fail:"),
        profile.stats.total_correct.to_string().green(),
        profile.stats.total_incorrect.to_string().red()
    );
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}
