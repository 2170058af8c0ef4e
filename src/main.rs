//! menukit demo CLI
//!
//! Drives every engine operation against small sample groups: plain
//! rendering, keyboard-driven choice, range-constrained prompting, and
//! head-callback auto dispatch.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use menukit::node::Callback;
use menukit::ui::{Ui, UiConfig};

#[derive(Parser)]
#[command(name = "menukit")]
#[command(about = "Fixed-width terminal menus, demo driver")]
#[command(version)]
struct Cli {
    /// Frame width in columns
    #[arg(long, default_value_t = 40)]
    width: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sample group and exit
    Show,
    /// Keyboard-driven single choice over a sample menu
    Choose,
    /// Render a sample group, then prompt for a number in [1, 5)
    Ask,
    /// Run a group generically via its head callback
    Auto,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut ui = Ui::with_config(UiConfig {
        line_characters: cli.width,
    });

    let result = match cli.command {
        Commands::Show => cmd_show(&mut ui),
        Commands::Choose => cmd_choose(&mut ui),
        Commands::Ask => cmd_ask(&mut ui),
        Commands::Auto => cmd_auto(&mut ui),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_show(ui: &mut Ui) -> io::Result<()> {
    ui.set_group("HW").add("Hello").add("world").add("!");
    ui.show_group("HW")
}

fn cmd_choose(ui: &mut Ui) -> io::Result<()> {
    ui.set_group("drinks").add("tea").add("coffee").add("water");

    let row = ui.show_group_and_choose("drinks")?;

    Ui::clear_screen()?;
    println!("chose row {row}");
    Ok(())
}

fn cmd_ask(ui: &mut Ui) -> io::Result<()> {
    ui.set_group("guess").add("Pick a number");

    let val: u32 = ui.show_and_get_group_in_range("guess", 1, 5)?;

    println!("got {val}");
    Ok(())
}

fn cmd_auto(ui: &mut Ui) -> io::Result<()> {
    ui.set_group("sizes")
        .add("small")
        .add("medium")
        .add("large")
        .then(Callback::int_arg(|row| format!("size #{row} it is")));

    let result = ui.call_group_auto("sizes")?;

    Ui::clear_screen()?;
    println!("{result}");
    Ok(())
}
