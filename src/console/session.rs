//! The interactive session loop
//!
//! Drives an [`Exploration`] over any line-oriented input and output, so a
//! test can script a whole visit and read back the transcript. The real
//! binary wires this to stdin and stdout.

use super::Theme;
use crate::data::{Mansion, RoomId, Verdict};
use crate::game::{
    classic_mansion, Arrival, CaseReport, Casebook, Choice, Exploration, GameLevel, RoomView,
    StepOutcome,
};
use crate::Result;
use std::io::{self, BufRead, IsTerminal, Write};

/// Knobs for a console session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub level: GameLevel,
    pub theme: Theme,
    /// Print the session journal after the report.
    pub show_journal: bool,
    /// Print the case report as JSON at the very end.
    pub json_report: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            level: GameLevel::Master,
            theme: Theme::default(),
            show_journal: false,
            json_report: false,
        }
    }
}

/// Run the classic case on stdin and stdout.
///
/// Styling is switched off when stdout is not a terminal, so piped output
/// stays free of escape codes.
pub fn run(mut options: SessionOptions) -> Result<()> {
    if !io::stdout().is_terminal() {
        options.theme.enabled = false;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    run_with(&mut input, &mut output, options)?;
    Ok(())
}

/// Drive the classic mansion case over the given input and output.
pub fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: SessionOptions,
) -> Result<CaseReport> {
    let (mansion, entry) = classic_mansion()?;
    let casebook = Casebook::classic()?;
    drive(input, output, mansion, entry, casebook, options)
}

/// Drive a session over any mansion and casebook.
pub fn drive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mansion: Mansion,
    entry: RoomId,
    casebook: Casebook,
    options: SessionOptions,
) -> Result<CaseReport> {
    let theme = &options.theme;
    let (mut exploration, arrival) =
        Exploration::begin(mansion, entry, casebook, options.level);

    writeln!(
        output,
        "{}",
        theme.bold("Welcome to the Detective Quest mansion!")
    )?;
    writeln!(output, "Playing as: {}", theme.paint(theme.accent, &options.level.to_string()))?;
    writeln!(output, "The exploration begins...")?;

    print_arrival(output, theme, &arrival)?;

    while !exploration.is_over() {
        print_menu(output, theme, &exploration.survey())?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => {
                // Input ran dry; treat it as leaving the mansion.
                exploration.choose(Choice::Quit);
                writeln!(output, "Exploration over.")?;
                break;
            }
        };

        match parse_choice(&line) {
            Some(Choice::Quit) => {
                exploration.choose(Choice::Quit);
                writeln!(output, "Exploration over.")?;
            }
            Some(choice) => match exploration.choose(choice) {
                StepOutcome::Moved(arrival) => print_arrival(output, theme, &arrival)?,
                StepOutcome::Blocked => {
                    print_invalid(output, theme)?;
                    print_banner(output, theme, exploration.survey().name)?;
                }
                StepOutcome::Ended => {}
            },
            None => {
                print_invalid(output, theme)?;
                print_banner(output, theme, exploration.survey().name)?;
            }
        }
    }

    print_report(input, output, theme, &mut exploration)?;

    if options.show_journal {
        print_journal(output, theme, &exploration)?;
    }

    let report = exploration.case_report();
    if options.json_report {
        writeln!(output)?;
        writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
    }

    Ok(report)
}

fn print_banner<W: Write>(output: &mut W, theme: &Theme, name: &str) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "You are in: {}", theme.bold(name))?;
    Ok(())
}

fn print_arrival<W: Write>(output: &mut W, theme: &Theme, arrival: &Arrival) -> Result<()> {
    print_banner(output, theme, &arrival.room)?;

    if let Some(notice) = &arrival.clue {
        writeln!(
            output,
            "{} {}",
            theme.paint(theme.clue, "CLUE FOUND:"),
            notice.text
        )?;
    }

    if arrival.path_ends {
        writeln!(output, "You reached the end of this path!")?;
    }
    Ok(())
}

fn print_menu<W: Write>(output: &mut W, theme: &Theme, view: &RoomView<'_>) -> Result<()> {
    writeln!(output, "Choose your path:")?;
    if let Some(left) = view.left {
        writeln!(output, "  (l) Go left  -> {}", theme.paint(theme.accent, left))?;
    }
    if let Some(right) = view.right {
        writeln!(output, "  (r) Go right -> {}", theme.paint(theme.accent, right))?;
    }
    writeln!(output, "  (q) Leave the exploration")?;
    write!(output, "Option: ")?;
    output.flush()?;
    Ok(())
}

fn print_invalid<W: Write>(output: &mut W, theme: &Theme) -> Result<()> {
    writeln!(
        output,
        "{}",
        theme.paint(theme.alert, "Invalid option, try again.")
    )?;
    Ok(())
}

/// The end-of-session report: clue list, then associations, most-cited
/// suspect and the accusation prompt at suspect-tracking levels.
fn print_report<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    theme: &Theme,
    exploration: &mut Exploration,
) -> Result<()> {
    if exploration.level().collects_clues() {
        writeln!(output)?;
        writeln!(
            output,
            "{}",
            theme.bold("CLUES COLLECTED (ALPHABETICAL ORDER):")
        )?;
        if exploration.clues().is_empty() {
            writeln!(output, "No clues were collected.")?;
        } else {
            for clue in exploration.clues() {
                writeln!(output, "  - {}", theme.paint(theme.clue, clue))?;
            }
        }
    }

    if !exploration.level().tracks_suspects() {
        return Ok(());
    }

    writeln!(output)?;
    writeln!(output, "{}", theme.bold("CLUE -> SUSPECT ASSOCIATIONS:"))?;
    for entry in exploration.ledger() {
        writeln!(
            output,
            "  {} -> {} ({} citations)",
            entry.clue,
            theme.paint(theme.accent, entry.suspect),
            entry.citations
        )?;
    }

    if let Some((suspect, citations)) = exploration.ledger().most_cited() {
        writeln!(output)?;
        writeln!(
            output,
            "{} {} ({} citations)",
            theme.paint(theme.success, "MOST CITED SUSPECT:"),
            suspect,
            citations
        )?;
    }

    writeln!(output)?;
    write!(output, "Who do you accuse? ")?;
    output.flush()?;
    let accused = read_line(input)?.unwrap_or_default();

    if let Some(verdict) = exploration.accuse(accused.trim()) {
        let line = match verdict {
            Verdict::Confirmed => theme.paint(theme.success, "Culprit confirmed!"),
            Verdict::Insufficient => theme.paint(theme.warning, "Insufficient evidence."),
            Verdict::NoEvidence => theme.paint(theme.alert, "No clue points at that suspect."),
        };
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

fn print_journal<W: Write>(output: &mut W, theme: &Theme, exploration: &Exploration) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", theme.bold("SESSION JOURNAL:"))?;
    for entry in exploration.journal().entries() {
        writeln!(
            output,
            "  [{}] {}: {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.kind.label(),
            entry.detail
        )?;
    }
    writeln!(output, "{}", exploration.journal().summary())?;

    let stats = exploration.stats();
    writeln!(
        output,
        "Rooms entered: {} | Steps: {} | Wrong turns: {} | Clues: {}",
        stats.rooms_entered, stats.steps_taken, stats.wrong_turns, stats.clues_collected
    )?;
    Ok(())
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim() {
        "l" | "L" => Some(Choice::Left),
        "r" | "R" => Some(Choice::Right),
        "q" | "Q" => Some(Choice::Quit),
        _ => None,
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_parse_from_trimmed_single_letters() {
        assert_eq!(parse_choice("l\n"), Some(Choice::Left));
        assert_eq!(parse_choice("  R  "), Some(Choice::Right));
        assert_eq!(parse_choice("q"), Some(Choice::Quit));
        assert_eq!(parse_choice("left"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("x"), None);
    }
}
