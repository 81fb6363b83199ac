extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;
extern crate term_grid;
extern crate hlex;

use clap::{Arg, ArgMatches, App};
use term_grid::{Grid, GridOptions, Direction, Filling, Cell};

use hlex::assembler::{parser, reader};

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    debug!("Arguments:\n\tVerbosity: {}\n\tOutfile: {}\n\tInfile: {}",
        verbosity_filter(args.occurrences_of("verbose")),
        args.value_of("output").unwrap_or("None"),
        args.value_of("INPUT").unwrap_or("None")
    );

    // INPUT is required, clap refuses to get here without it.
    let ipath = Path::new(args.value_of("INPUT").unwrap_or_default());

    let ifile = match File::open(&ipath) {
        Err(err) => {
            error!("fatal: unable to open input file `{}`: {}", ipath.display(), err);
            std::process::exit(1);
        },
        Ok(file) => file,
    };

    let lines = match reader::tokenize_source(ifile) {
        Err(err) => {
            error!("fatal: {}: {}", ipath.display(), err);
            std::process::exit(1);
        },
        Ok(lines) => lines,
    };
    info!("{}: {} instruction(s)", ipath.display(), lines.len());

    if args.is_present("print-debug") {
        let mut grid = Grid::new(GridOptions {
            filling:     Filling::Spaces(1),
            direction:   Direction::LeftToRight,
        });

        for line in lines.iter() {
            let typed = match parser::parse(&line.text) {
                Ok(ins) => ins.to_string(),
                Err(err) => {
                    warn!("line {}: {}", line.number, err);
                    "?".to_string()
                },
            };
            grid.add(Cell::from(format!("{:04}:", line.number)));
            grid.add(Cell::from(format!("{:?}", line.components)));
            grid.add(Cell::from("=>".to_string()));
            grid.add(Cell::from(typed));
        }

        println!("{}", grid.fit_into_columns(4));
    }

    let mut out: Box<dyn Write> = match args.value_of("output") {
        Some(filename) => match File::create(filename) {
            Err(err) => {
                error!("fatal: unable to open output file `{}`: {}", filename, err);
                std::process::exit(1);
            },
            Ok(file) => Box::new(file),
        },
        None => Box::new(io::stdout()),
    };

    for line in lines.iter() {
        if let Err(err) = writeln!(out, "{}", line.components.join(" ")) {
            error!("fatal: unable to write output: {}", err);
            std::process::exit(1);
        }
    }
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .required(true)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .help("write the tokens to an outfile instead of STDOUT"))
        .arg(Arg::with_name("print-debug")
            .short("d")
            .alias("show")
            .alias("s")
            .takes_value(false)
            .help("prints each line's components and typed instruction to STDOUT"))
        .get_matches()
}

fn verbosity_filter(verbosity: u64) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(verbosity_filter(verbosity))
        .chain(std::io::stderr())
        .apply().ok();
}
