//! Detective Quest: walk the rooms, gather the clues, accuse the culprit

use clap::Parser;
use detective_quest::console::{self, SessionOptions, Theme};
use detective_quest::game::GameLevel;
use detective_quest::Result;

#[derive(Debug, Parser)]
#[command(name = "detective-quest", version, about)]
struct Args {
    /// How deep the detective work goes
    #[arg(short, long, value_enum, default_value = "master")]
    level: GameLevel,

    /// Print the session journal after the report
    #[arg(long)]
    journal: bool,

    /// Print the case report as JSON at the end
    #[arg(long)]
    json_report: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let theme = if args.no_color {
        Theme::plain()
    } else {
        Theme::default()
    };

    console::run(SessionOptions {
        level: args.level,
        theme,
        show_journal: args.journal,
        json_report: args.json_report,
    })?;

    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║  Thanks for visiting the mansion, detective.     ║");
    println!("║  The case will keep.                             ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    Ok(())
}
