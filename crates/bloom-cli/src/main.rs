//! Bloom CLI - simulate and inspect gesture-driven formation scenes

mod commands;

use anyhow::Result;
use bloom_runtime::Mode;
use clap::{Parser, Subcommand};
use commands::{classify, init, layout, simulate};

#[derive(Parser)]
#[command(name = "bloom")]
#[command(about = "Headless tools for gesture-driven particle formations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default scene config
    Init {
        /// Output path
        #[arg(default_value = "bloom.toml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Run a scene for a number of frames against a gesture script
    Simulate {
        /// Path to scene config (TOML)
        #[arg(long)]
        config: Option<String>,

        /// Path to gesture script (JSON array of steps)
        #[arg(long)]
        script: Option<String>,

        /// Simulated frame rate
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Number of frames to run
        #[arg(long, default_value = "600")]
        frames: u64,

        /// Manual mode override before a frame, e.g. `120:formed` (repeatable)
        #[arg(long = "set-mode", value_parser = parse_override)]
        overrides: Vec<(u64, Mode)>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print a layer's settled positions
    Layout {
        /// Layer name (foliage, petals, photos)
        layer: String,

        /// Path to scene config (TOML)
        #[arg(long)]
        config: Option<String>,

        /// Mode to settle on
        #[arg(long, default_value = "formed")]
        mode: Mode,

        /// Output format (json or csv)
        #[arg(long, default_value = "json")]
        format: String,

        /// Print at most this many points
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Classify one landmark frame (JSON array of [x, y, z], or null)
    Classify {
        /// Path to landmark JSON
        input: String,

        /// Path to scene config (TOML) for classifier thresholds
        #[arg(long)]
        config: Option<String>,
    },
}

fn parse_override(s: &str) -> Result<(u64, Mode), String> {
    let (frame, mode) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:MODE, got '{s}'"))?;
    let frame: u64 = frame
        .trim()
        .parse()
        .map_err(|e| format!("invalid frame: {e}"))?;
    let mode: Mode = mode.trim().parse()?;
    Ok((frame, mode))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => init::run(&path, force),
        Commands::Simulate {
            config,
            script,
            fps,
            frames,
            overrides,
            format,
        } => simulate::run(simulate::SimulateArgs {
            config,
            script,
            fps,
            frames,
            overrides,
            format,
        }),
        Commands::Layout {
            layer,
            config,
            mode,
            format,
            limit,
        } => layout::run(layout::LayoutArgs {
            config,
            layer,
            mode,
            format,
            limit,
        }),
        Commands::Classify { input, config } => classify::run(&input, config.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_override_accepts_frame_and_mode() {
        assert_eq!(parse_override("120:formed").unwrap(), (120, Mode::Formed));
        assert_eq!(parse_override(" 5 : CHAOS ").unwrap(), (5, Mode::Chaos));
    }

    #[test]
    fn parse_override_rejects_garbage() {
        assert!(parse_override("formed").is_err());
        assert!(parse_override("x:formed").is_err());
        assert!(parse_override("3:tree").is_err());
    }

    #[test]
    fn cli_parses_simulate() {
        let cli = Cli::try_parse_from([
            "bloom", "simulate", "--frames", "10", "--set-mode", "3:formed",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate {
                frames, overrides, ..
            } => {
                assert_eq!(frames, 10);
                assert_eq!(overrides, vec![(3, Mode::Formed)]);
            }
            _ => panic!("expected simulate"),
        }
    }
}
