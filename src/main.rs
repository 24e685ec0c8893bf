#![doc = include_str!("../README.md")]

use clap::Parser;
use colored::Colorize;
use core::{error::Error, fmt::Display};
use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use tagtree::{
    RenderFormat, RenderOptions, compile_template, demo_document, read_template, render_document,
    write_document,
};
use tokio::io::stdout;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A template file.
    template: Option<PathBuf>,
    /// Sets an output file.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Sets an output format.
    #[arg(long, default_value = "text")]
    format: RenderFormat,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        template,
        output,
        format,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let mut document = if let Some(path) = template {
        compile_template(read_template(&path).await?)?
    } else {
        demo_document(None)
    };

    if output.is_some() {
        document = document.set_output(output);
    }

    let string = render_document(&document, &RenderOptions::new().set_format(format))?;

    write_document(&document, &string, &mut stdout()).await?;

    if let Some(path) = document.output() {
        println!("{}", saved_message(path.display().to_string().green()));
    }

    Ok(())
}

fn saved_message(path: impl Display) -> String {
    format!("Printout saved to file: {path}")
}
