//! CLI tool for color-palettes - lists palettes and prints them as JSON
//!
//! Usage:
//!   palettes_cli                           # List groups and palette names
//!   palettes_cli <group> <palette>         # Print one palette as a JSON array
//!   palettes_cli --json                    # Print the whole registry as JSON
//!   palettes_cli --json -o palettes.json   # Write the whole registry to a file
//!
//! Set `RUST_LOG=debug` to see registry initialisation.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use color_palettes::error::Result;
use color_palettes::{
    get_colors_by_palette_name, group_map, registry_json, PaletteError, PaletteGroupName,
};
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    match args {
        [] => list(),
        [flag] if flag == "--json" => {
            let json = registry_json(true)?;
            print_line(&json)
        }
        [flag, o, path] if flag == "--json" && o == "-o" => {
            let json = registry_json(true)?;
            fs::write(path, json)?;
            eprintln!("Written: {path}");
            Ok(())
        }
        [flag, ..] if flag == "--json" => usage(),
        [group, palette] => {
            let group: PaletteGroupName = group.parse()?;
            let colors = get_colors_by_palette_name(group, palette)
                .ok_or_else(|| PaletteError::UnknownName(format!("{group}/{palette}")))?;
            let json = serde_json::to_string(colors)?;
            print_line(&json)
        }
        _ => usage(),
    }
}

fn usage() -> ! {
    eprintln!("Usage: palettes_cli [<group> <palette> | --json [-o output.json]]");
    std::process::exit(2);
}

fn list() -> Result<()> {
    let mut out = io::stdout().lock();
    for group in PaletteGroupName::ALL {
        writeln!(out, "{group}")?;
        for (name, colors) in group_map(group).iter() {
            writeln!(out, "  {name:<16} {} colors", colors.len())?;
        }
    }
    Ok(())
}

fn print_line(s: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    writeln!(out)?;
    Ok(())
}
