// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::check::check_library;
use crate::cmd::generate::OutputFormat;
use crate::cmd::generate::SheetRequest;
use crate::cmd::generate::generate_sheet;
use crate::cmd::serve::server::start_server;
use crate::cmd::themes::ListFormat;
use crate::cmd::themes::list_themes;
use crate::error::Fallible;
use crate::types::difficulty::Difficulty;
use crate::types::language::Language;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// List the themes in a library.
    Themes {
        /// Path to the theme library. Defaults to the current directory.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
    /// Check the integrity of a theme library.
    Check {
        /// Path to the theme library. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Generate a sheet of cards for one theme.
    Generate {
        /// The theme's identifier.
        theme: String,
        /// Path to the theme library. Defaults to the current directory.
        directory: Option<String>,
        /// Maximum number of cards.
        #[arg(long)]
        count: Option<usize>,
        /// Keep the theme's word order.
        #[arg(long)]
        no_shuffle: bool,
        /// Seed for the shuffle, for reproducible sheets.
        #[arg(long)]
        seed: Option<u64>,
        /// Languages to print on each card. Repeat for several.
        #[arg(long = "lang", value_enum)]
        languages: Vec<Language>,
        /// Difficulties to draw words from. Repeat for several.
        #[arg(long = "difficulty", value_enum)]
        difficulties: Vec<Difficulty>,
        /// Output format.
        #[arg(long, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
        /// Write to this file instead of standard output.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Browse themes and print cards from a web browser.
    Serve {
        /// Path to the theme library. Defaults to the current directory.
        directory: Option<String>,
        /// Port to listen on.
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Themes { directory, format } => list_themes(directory, format),
        Command::Check { directory } => check_library(directory),
        Command::Generate {
            theme,
            directory,
            count,
            no_shuffle,
            seed,
            languages,
            difficulties,
            format,
            output,
        } => {
            let request = SheetRequest {
                theme,
                count,
                no_shuffle,
                seed,
                languages,
                difficulties,
                format,
            };
            generate_sheet(directory, request, output)
        }
        Command::Serve {
            directory,
            port,
            no_open,
        } => {
            let directory: PathBuf = match directory {
                Some(dir) => PathBuf::from(dir),
                None => std::env::current_dir()?,
            };
            start_server(directory, port, !no_open).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Command::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Command::try_parse_from([
            "charades",
            "generate",
            "animals",
            "./test",
            "--lang",
            "en",
            "--lang",
            "ar",
            "--difficulty",
            "easy",
            "--no-shuffle",
            "--format",
            "json",
        ])
        .unwrap();
        match cli {
            Command::Generate {
                theme,
                directory,
                languages,
                difficulties,
                no_shuffle,
                format,
                ..
            } => {
                assert_eq!(theme, "animals");
                assert_eq!(directory.as_deref(), Some("./test"));
                assert_eq!(languages, vec![Language::En, Language::Ar]);
                assert_eq!(difficulties, vec![Difficulty::Easy]);
                assert!(no_shuffle);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_reject_unknown_language() {
        let result = Command::try_parse_from(["charades", "generate", "animals", "--lang", "fr"]);
        assert!(result.is_err());
    }
}
