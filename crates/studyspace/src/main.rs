use studyspace_core::{Config, init_logging};

mod app;
mod commands;
mod table;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Quiet unless -v was given; decided before logging starts
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose, &Config::default().log_level);

    commands::run_command(&matches)?;

    Ok(())
}
