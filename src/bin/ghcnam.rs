//! GHCN-Daily Archive Manager
//!
//! Maintain a local mirror of the GHCN-Daily archive: download it, compare
//! version markers, extract individual station files, and tear it down.

use clap::{App, AppSettings, Arg, SubCommand};
use dirs::home_dir;
use std::{error::Error, path::PathBuf};

use ghcnd_data::{Archive, ArchiveConfig};

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        println!("error: {}", e);

        let mut cause = e.source();
        while let Some(err) = cause {
            println!("caused by: {}", err);
            cause = err.source();
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let app = App::new("ghcnam")
        .about("Manage a local mirror of the GHCN-Daily archive.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("root")
                .short("r")
                .long("root")
                .takes_value(true)
                .help("Path to the mirror.")
                .long_help("Path to the mirror. Defaults to '${HOME}/ghcnd/'"),
        )
        .arg(
            Arg::with_name("url")
                .short("u")
                .long("url")
                .takes_value(true)
                .default_value(ArchiveConfig::DEFAULT_URL)
                .help("Base address of the remote archive."),
        )
        .subcommand(SubCommand::with_name("status").about("Report the state of the local mirror."))
        .subcommand(
            SubCommand::with_name("setup")
                .about("Download all archive files, overwriting local copies."),
        )
        .subcommand(
            SubCommand::with_name("check-version")
                .about("Compare the local version marker against the remote one."),
        )
        .subcommand(
            SubCommand::with_name("extract")
                .about("Extract station daily files from the bundle.")
                .arg(
                    Arg::with_name("stations")
                        .index(1)
                        .multiple(true)
                        .required(true)
                        .takes_value(true)
                        .help("Station identifiers (e.g. USW00094728)."),
                ),
        )
        .subcommand(
            SubCommand::with_name("remove")
                .about("Delete the mirrored files, keeping the root directory."),
        )
        .subcommand(SubCommand::with_name("list").about("List the files in the mirror."));

    let matches = app.get_matches();

    let root = matches
        .value_of("root")
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|hd| hd.join("ghcnd")))
        .expect("Invalid root.");
    let url = matches.value_of("url").expect("Invalid url.");

    let mut arch = Archive::connect(ArchiveConfig::new(url, root))?;

    match matches.subcommand() {
        ("status", _) => {
            println!("{:?}", arch);
        }
        ("setup", _) => {
            let failures = arch.setup();
            for failure in &failures {
                println!("failed to download {:?}: {}", failure.file, failure.error);
            }
            if failures.is_empty() {
                println!("setup complete, version {}", arch.version().unwrap_or("unknown"));
            } else {
                return Err(Box::new(failures.into_iter().next().unwrap().error));
            }
        }
        ("check-version", _) => match arch.check_for_newer_version()? {
            Some(check) => {
                println!("current version: {}; newest version: {}", check.local, check.remote);
                if check.newer_available() {
                    println!("a newer archive is available, run setup to refresh");
                } else {
                    println!("the local mirror is up to date");
                }
            }
            None => println!("no local version available, run setup first"),
        },
        ("extract", Some(sub_matches)) => {
            let station_ids: Vec<&str> = sub_matches
                .values_of("stations")
                .into_iter()
                .flatten()
                .collect();

            let failures = arch.extract_stations(&station_ids)?;
            for failure in &failures {
                println!("failed to extract {}: {}", failure.station_id, failure.error);
            }
            println!(
                "{} of {} stations extracted",
                station_ids.len() - failures.len(),
                station_ids.len()
            );
        }
        ("remove", _) => {
            arch.remove_archive()?;
            println!("archive removed from {}", arch.root().display());
        }
        ("list", _) => {
            for file_name in arch.list_files()? {
                println!("{}", file_name);
            }
        }
        _ => unreachable!("SubcommandRequiredElseHelp"),
    }

    Ok(())
}
