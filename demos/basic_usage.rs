#!/usr/bin/env rust

//! Basic usage example of the instpatch version API

use instpatch::{check_version, version, Result, Version, VERSION};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    println!("libInstPatch Version Example");
    println!("============================");

    let (major, minor, micro) = version();
    println!("Version triple: {}.{}.{}", major, minor, micro);
    println!("Display string: {}", VERSION);

    let required: Version = "1.1.0".parse()?;
    log::info!("checking requirement {}", required);
    if check_version(required.major, required.minor, required.micro) {
        println!("Requirement >= {} satisfied", required);
    } else {
        println!("Requirement >= {} not satisfied", required);
    }

    Ok(())
}
