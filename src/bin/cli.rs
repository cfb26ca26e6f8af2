use clap::{App, AppSettings, Arg, SubCommand};
use instpatch::{check_version, Result, Version, VERSION};
use std::{
    io::{self, Write},
    process,
};

/// How `version` renders its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VersionFormat {
    Long,
    Short,
    Json,
}

fn main() {
    env_logger::init();

    let matches = App::new("instpatch-cli")
        .version(VERSION)
        .about("libInstPatch version information")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("version")
                .about("Print the library version")
                .arg(
                    Arg::with_name("short")
                        .short("s")
                        .long("short")
                        .help("Print only the version number")
                        .conflicts_with("json"),
                )
                .arg(
                    Arg::with_name("json")
                        .short("j")
                        .long("json")
                        .help("Print the version triple as JSON"),
                ),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("Check that the library is at least the given version")
                .arg(
                    Arg::with_name("required")
                        .value_name("VERSION")
                        .help("Required version, e.g. 1.1.0")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match matches.subcommand() {
        ("version", Some(version_matches)) => {
            let format = if version_matches.is_present("json") {
                VersionFormat::Json
            } else if version_matches.is_present("short") {
                VersionFormat::Short
            } else {
                VersionFormat::Long
            };
            handle_version_command(&mut out, format)
        }
        ("check", Some(check_matches)) => {
            let required = check_matches.value_of("required").unwrap_or_default();
            handle_check_command(&mut out, required)
        }
        _ => {
            println!("Use --help for usage information");
            Ok(2)
        }
    };

    match code {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn handle_version_command(out: &mut impl Write, format: VersionFormat) -> Result<i32> {
    let current = Version::current();
    log::debug!("reporting version {:?} as {:?}", current, format);

    match format {
        VersionFormat::Json => writeln!(out, "{}", serde_json::to_string(&current)?)?,
        VersionFormat::Short => writeln!(out, "{}", current)?,
        VersionFormat::Long => writeln!(out, "libInstPatch {}", current)?,
    }
    Ok(0)
}

/// Exit code 0 when the library satisfies `required`, 1 when it is older
fn handle_check_command(out: &mut impl Write, required: &str) -> Result<i32> {
    let required: Version = required.parse()?;
    log::debug!("checking {} against {}", VERSION, required);

    if check_version(required.major, required.minor, required.micro) {
        writeln!(out, "libInstPatch {} satisfies >= {}", VERSION, required)?;
        Ok(0)
    } else {
        writeln!(out, "libInstPatch {} is older than {}", VERSION, required)?;
        Ok(1)
    }
}
