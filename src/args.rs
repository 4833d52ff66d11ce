//! CLI args

use std::path::PathBuf;

#[derive(Clone, Debug, clap::Parser)]
#[command(version, about)]
pub struct Args {
    /// Print more information about requests and written files
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Install fonts into the user font directory
    ///
    /// Example: fifi install nunito, inter, open sans
    Install {
        /// Font families, separated by commas
        #[arg(required = true, num_args = 1..)]
        fonts: Vec<String>,
        /// Prefer static fonts (default: variable)
        #[arg(short = 's', long = "static")]
        prefer_static: bool,
    },
    /// Download fonts into a directory
    ///
    /// Example: fifi download nunito -o assets/fonts
    Download {
        /// Font families, separated by commas
        #[arg(required = true, num_args = 1..)]
        fonts: Vec<String>,
        /// Output directory (default: current dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Prefer static fonts (default: variable)
        #[arg(short = 's', long = "static")]
        prefer_static: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn install_args() {
        let args = Args::parse_from(["fifi", "install", "nunito,", "open", "sans", "-s"]);
        let Command::Install {
            fonts,
            prefer_static,
        } = args.command
        else {
            panic!("expected install");
        };
        assert_eq!(fonts, ["nunito,", "open", "sans"]);
        assert!(prefer_static);
        assert!(!args.verbose);
    }

    #[test]
    fn download_args() {
        let args = Args::parse_from(["fifi", "-v", "download", "inter", "--output", "assets/fonts"]);
        let Command::Download {
            fonts,
            output,
            prefer_static,
        } = args.command
        else {
            panic!("expected download");
        };
        assert_eq!(fonts, ["inter"]);
        assert_eq!(output, Some(PathBuf::from("assets/fonts")));
        assert!(!prefer_static);
        assert!(args.verbose);
    }

    #[test]
    fn fonts_are_required() {
        assert!(Args::try_parse_from(["fifi", "install"]).is_err());
        assert!(Args::try_parse_from(["fifi", "download", "-s"]).is_err());
    }
}
