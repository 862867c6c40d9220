mod watch;

use boxspring_core::run_source;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boxspring")]
#[command(about = "boxspring - a mass-spring simulator in a reflective box", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene file to completion and print the final particle states
    Run {
        /// Path to the scene file
        file: PathBuf,
        /// Print states as CSV rows instead of the readable form
        #[arg(long)]
        csv: bool,
    },
    /// Run a scene file, then re-run it every time it changes on disk
    Watch {
        /// Path to the scene file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file, csv } => {
            match run_file(&file, csv) {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Watch { file } => {
            match watch::watch_file(&file) {
                Ok(()) => {}
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn run_file(file: &PathBuf, csv: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(file)?;
    let states = run_source(&source)?;

    if csv {
        println!("index,x,y,z,vx,vy,vz");
        for (i, state) in states.iter().enumerate() {
            let p = state.position;
            let v = state.velocity;
            println!("{},{},{},{},{},{},{}", i, p.x, p.y, p.z, v.x, v.y, v.z);
        }
    } else {
        for (i, state) in states.iter().enumerate() {
            println!(
                "particle {}: pos = ({}, {}, {})  vel = ({}, {}, {})",
                i,
                state.position.x,
                state.position.y,
                state.position.z,
                state.velocity.x,
                state.velocity.y,
                state.velocity.z
            );
        }
    }

    Ok(())
}
