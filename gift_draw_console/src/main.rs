#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod import;

use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    // Results go to stdout, so keep logs out of the way.
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Gift draw")
        .version(clap::crate_version!())
        .about("Draws who gives a gift to whom, over one or more rounds")
        .subcommand_required(true)
        .subcommand(
            Command::new("import")
                .about(concat!(
                    "Reads one game per file and draws a selection for every player. ",
                    "Nobody draws the same person twice across the given games."
                ))
                .arg(
                    arg!([files] ... "Game files: game ID on the first line, then one \
                                      `player,excluded,...` line per player")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"seed" <seed> "Seed for the random draw; same seed and files give \
                                          the same result")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--"format" <format>)
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("import", sub_matches)) => import::run(import::ImportConfig {
            paths: sub_matches
                .get_many::<std::path::PathBuf>("files")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            seed: sub_matches.get_one::<u64>("seed").copied(),
            format: match sub_matches.get_one::<String>("format").unwrap().as_str() {
                "text" => import::OutputFormat::Text,
                "json" => import::OutputFormat::Json,
                _ => panic!(),
            },
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
