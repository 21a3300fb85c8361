use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Organise a music folder into Serato crates and find duplicate tracks.
#[derive(Parser, Debug)]
#[command(name = "serato-tools", version, about)]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create one crate per folder of the music directory
    Crates(CratesArgs),

    /// Find duplicate music files in a folder
    Fd {
        /// Root directory for your music
        #[arg(short, long)]
        dir: PathBuf,
    },

    /// List the tracks of a crate file as absolute paths
    Show {
        /// Path to a `.crate` file
        crate_file: PathBuf,
    },

    /// Print the effective configuration as TOML
    PrintConfig,
}

#[derive(ClapArgs, Debug)]
pub struct CratesArgs {
    /// Root directory for your music
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Parent crate every generated crate is nested under
    #[arg(short, long)]
    pub root_crate: Option<String>,

    /// Plan crates and report problems without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// What to do with tracks that cannot be attributed to a volume
    #[arg(long, value_enum)]
    pub on_bad_track: Option<BadTrackArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BadTrackArg {
    /// Leave the track out and keep going
    Skip,
    /// Stop at the first bad track
    Abort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_crates_subcommand() {
        let args = Args::try_parse_from([
            "serato-tools",
            "-vv",
            "crates",
            "--dir",
            "/Music",
            "-r",
            "Library",
            "--on-bad-track",
            "abort",
        ])
        .unwrap();

        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Crates(c) => {
                assert_eq!(c.dir, PathBuf::from("/Music"));
                assert_eq!(c.root_crate.as_deref(), Some("Library"));
                assert_eq!(c.on_bad_track, Some(BadTrackArg::Abort));
                assert!(!c.dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn fd_requires_dir() {
        assert!(Args::try_parse_from(["serato-tools", "fd"]).is_err());
        let args = Args::try_parse_from(["serato-tools", "fd", "-d", "/Music"]).unwrap();
        assert!(matches!(args.command, Command::Fd { dir } if dir == PathBuf::from("/Music")));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
