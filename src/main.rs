//! `railkit` command line: decode user records and simulate rail
//! transitions frame by frame.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use railkit::model::UserRecord;
use railkit::options::Options;
use railkit::rail::{Destination, FrameClock, Rail};
use railkit::RailkitError;
use web_time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "railkit", about = "Rail selection and user record tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a JSON user record and print its wire form
    User {
        /// JSON file holding one user object
        file: PathBuf,
    },
    /// Run one selection transition and log every frame
    Simulate {
        /// Number of destinations
        #[arg(long, default_value_t = 4)]
        destinations: usize,
        /// Initially selected destination
        #[arg(long, default_value_t = 0)]
        from: usize,
        /// Destination to select
        #[arg(long, default_value_t = 1)]
        to: usize,
        /// Frame length in milliseconds
        #[arg(
            long,
            default_value_t = 16,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        frame_ms: u64,
        /// TOML options file
        #[arg(long)]
        options: Option<PathBuf>,
    },
}

#[allow(clippy::print_stdout)]
fn decode_user(file: &Path) -> Result<(), RailkitError> {
    let text = std::fs::read_to_string(file)?;
    let user = UserRecord::from_json(&text)?;
    log::info!("decoded user {} (@{})", user.id(), user.username());
    let wire = serde_json::to_string_pretty(&user.encode())
        .map_err(railkit::CodecError::from)?;
    println!("{wire}");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn simulate(
    destinations: usize,
    from: usize,
    to: usize,
    frame: Duration,
    options: Option<&Path>,
) -> Result<(), RailkitError> {
    let options = match options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let items = (0..destinations)
        .map(|i| Destination::new(format!("icon-{i}"), format!("Item {i}")))
        .collect();
    let mut clock = FrameClock::new(options.rail.transition());
    let mut rail = Rail::new(items, from, options.rail)?;
    let _ = rail.select(to)?;

    // synthetic frame times so the run is independent of wall-clock jitter
    let mut now = Instant::now();
    let _ = clock.frame_at(now);
    let mut frame_no = 0_u32;
    loop {
        now += frame;
        if !rail.tick(clock.frame_at(now)) {
            break;
        }
        frame_no += 1;
        for view in rail.items().filter(|v| v.index == from || v.index == to) {
            log::info!(
                "frame {frame_no:3} #{} {:?} progress {:.3} eased {:.3} \
                 label {:.3}",
                view.index,
                view.phase,
                view.progress,
                view.eased_progress,
                view.label_opacity
            );
        }
    }
    println!("settled after {frame_no} frames on destination {to}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::User { file } => decode_user(file),
        Command::Simulate {
            destinations,
            from,
            to,
            frame_ms,
            options,
        } => simulate(
            *destinations,
            *from,
            *to,
            Duration::from_millis(*frame_ms),
            options.as_deref(),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
