use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use maum_core::config::SessionConfig;
use maum_core::report::ReportEntry;
use maum_core::session::{SessionController, SessionView, Speaker, TurnOutcome};

/// Width of a full (100%) report bar, in character cells.
const BAR_WIDTH: usize = 40;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/log".to_string(), "/reset".to_string()],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// The main entry point for the maum readline REPL application.
///
/// Sets up a rustyline-based REPL that:
/// 1. Loads the optional `maum.toml` configuration
/// 2. Provides command completion for /log and /reset
/// 3. Submits each non-blank line as one turn to the session controller
/// 4. Renders colored chat output and the report bar chart
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match SessionConfig::load("maum.toml") {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to load maum.toml, using defaults: {err}");
            SessionConfig::default()
        }
    };
    let terminate_keyword = config.terminate_keyword.clone();
    let mut controller = SessionController::new(config);

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== 마음 (maum) — 공감형 감정 상담 ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "감정을 이야기해 보세요. '{terminate_keyword}'를 입력하면 감정 분석 보고서가 나옵니다. '/log'는 대화 기록, '/reset'은 새 상담, 'quit'은 종료."
        )
        .bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "안녕히 가세요!".bright_green());
                    break;
                }

                // Blank lines are not submitted turns.
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                // Presentation-layer commands, intercepted before the turn
                // reaches the controller.
                if trimmed == "/reset" {
                    controller.reset();
                    println!(
                        "{}",
                        "새 상담을 시작합니다. 이전 데이터는 모두 지워졌어요.".bright_green()
                    );
                    continue;
                }
                if trimmed == "/log" {
                    render_log(controller.view());
                    continue;
                }

                match controller.process_turn(trimmed) {
                    TurnOutcome::Replied(reply) => {
                        println!("{}", format!("[나] {trimmed}").green());
                        println!("{}", format!("[AI] {reply}").bright_blue());
                    }
                    TurnOutcome::ReportRequested => {
                        render_report(controller.view());
                    }
                    TurnOutcome::Ignored => {}
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

/// Renders the report view: one colored bar per emotion, largest share first.
fn render_report(view: SessionView) {
    match view {
        SessionView::Report(entries) => {
            println!();
            println!("{}", "📊 감정 분석 보고서".bright_magenta().bold());
            for entry in &entries {
                println!("{}", format_report_row(entry));
            }
            println!();
            println!(
                "{}",
                "결과가 출력되었습니다. '/reset'을 입력하면 새 상담이 시작됩니다.".bright_black()
            );
        }
        SessionView::EmptyReport => {
            println!("{}", "분석할 감정 데이터가 없습니다.".yellow());
            println!("{}", "'/reset'을 입력하면 다시 시작할 수 있어요.".bright_black());
        }
        SessionView::Chat(_) => {
            // Only reachable if a report render is requested outside report
            // mode; nothing to draw.
        }
    }
}

/// Renders the conversation log, most recent first.
fn render_log(view: SessionView) {
    match view {
        SessionView::Chat(messages) => {
            if messages.is_empty() {
                println!("{}", "아직 대화가 없습니다.".bright_black());
                return;
            }
            for message in &messages {
                let line = match message.speaker {
                    Speaker::User => format!("[나] {}", message.content).green(),
                    Speaker::Agent => format!("[AI] {}", message.content).bright_blue(),
                };
                println!("{line}");
            }
        }
        SessionView::Report(_) | SessionView::EmptyReport => {
            println!(
                "{}",
                "지금은 보고서 화면이에요. '/reset' 후 다시 시도하세요.".yellow()
            );
        }
    }
}

/// Formats one report row: label, proportional bar, percentage value.
fn format_report_row(entry: &ReportEntry) -> String {
    let cells = ((entry.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
    let bar = "█".repeat(cells.max(1));
    let label = format!("{:<12}", entry.category.to_string());
    let value = format!("{:>5.1}%", entry.percentage);
    match parse_hex_color(entry.color) {
        Some((r, g, b)) => format!("{label} {} {value}", bar.truecolor(r, g, b)),
        None => format!("{label} {bar} {value}"),
    }
}

/// Parses a `#rrggbb` color into RGB components.
fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#4A6FA5"), Some((0x4A, 0x6F, 0xA5)));
        assert_eq!(parse_hex_color("#FFD166"), Some((0xFF, 0xD1, 0x66)));
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed_input() {
        assert_eq!(parse_hex_color("4A6FA5"), None);
        assert_eq!(parse_hex_color("#4A6F"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }
}
