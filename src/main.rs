use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

use mobstart::{
    dialog::StartDialog,
    runtime::{CrosstermEventSource, DialogEvent, EventSource, Runner},
    session::StartDecision,
    settings::MobSettings,
};

/// terminal start dialog for mob programming sessions
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Shows a modal start dialog for a mob programming session: timer duration, timer sound, and screen share, gated on the mob git settings being usable. Prints the decision and the entered values on exit."
)]
pub struct Cli {
    /// timer duration in minutes to pre-fill
    #[clap(short = 'm', long, default_value_t = 10)]
    timer_minutes: u32,

    /// pre-select playing a sound when the timer ends
    #[clap(long)]
    timer_sound: bool,

    /// pre-select starting screen share with the session
    #[clap(long)]
    start_with_share: bool,

    /// git remote the wip branch is shared through
    #[clap(long, default_value = "origin")]
    remote_name: String,

    /// branch the session branches off from
    #[clap(long, default_value = "main")]
    base_branch: String,

    /// working branch shared by the mob
    #[clap(long, default_value = "mob-session")]
    wip_branch: String,

    /// print the outcome as json
    #[clap(long)]
    json: bool,
}

impl Cli {
    /// Convert CLI arguments to the mob settings the dialog is gated on
    fn to_settings(&self) -> MobSettings {
        MobSettings {
            remote_name: self.remote_name.clone(),
            base_branch: self.base_branch.clone(),
            wip_branch: self.wip_branch.clone(),
            timer_minutes: self.timer_minutes,
            timer_sound: self.timer_sound,
            start_with_share: self.start_with_share,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let settings = cli.to_settings();
    let precondition = settings.validate_for_start();

    let mut dialog = StartDialog::new();
    dialog.set_timer_minutes(settings.timer_minutes);
    dialog.set_timer_sound(settings.timer_sound);
    dialog.set_start_with_share(settings.start_with_share);
    dialog.set_precondition_result(precondition.can_execute, precondition.reason.as_deref());

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = CrosstermEventSource::new();
    let decision = show_dialog(&mut terminal, &mut dialog, events)?;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    report(&dialog, decision, cli.json)?;

    Ok(())
}

/// Runs the modal loop: draw, wait for a key, dispatch, until a terminal
/// action fires. Blocks the caller, which is the point of a modal dialog.
fn show_dialog<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    dialog: &mut StartDialog,
    events: E,
) -> Result<StartDecision, Box<dyn Error>> {
    let runner = Runner::new(events);

    terminal.draw(|f| f.render_widget(&*dialog, f.area()))?;

    while dialog.is_open() {
        match runner.step() {
            Ok(DialogEvent::Key(key)) => dialog.handle_key(key),
            Ok(DialogEvent::Resize) => {}
            // the terminal input is gone; same as closing the window
            Err(_) => dialog.close(),
        }
        terminal.draw(|f| f.render_widget(&*dialog, f.area()))?;
    }

    // is_open() is false, so a decision is always present here
    Ok(dialog.decision().unwrap_or(StartDecision::Cancelled))
}

fn report(dialog: &StartDialog, decision: StartDecision, json: bool) -> Result<(), Box<dyn Error>> {
    let request = if decision == StartDecision::Confirmed {
        Some(dialog.request()?)
    } else {
        None
    };

    if json {
        let outcome = serde_json::json!({
            "decision": decision,
            "request": request,
        });
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("decision: {decision}");
    if let Some(request) = request {
        println!("timer minutes: {}", request.timer_minutes);
        println!("timer sound: {}", request.timer_sound);
        println!("start with share: {}", request.start_with_share);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_maps_onto_mob_settings() {
        let cli = Cli::parse_from([
            "mobstart",
            "-m",
            "25",
            "--timer-sound",
            "--wip-branch",
            "mob/team-a",
        ]);
        let settings = cli.to_settings();

        assert_eq!(settings.timer_minutes, 25);
        assert!(settings.timer_sound);
        assert!(!settings.start_with_share);
        assert_eq!(settings.remote_name, "origin");
        assert_eq!(settings.base_branch, "main");
        assert_eq!(settings.wip_branch, "mob/team-a");
        assert!(settings.validate_for_start().can_execute);
    }
}
