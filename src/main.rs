extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate tally;

use clap::{App, Arg};
use failure::Error;
use std::io;
use tally::{Order, Table};

fn main() -> Result<(), Error> {
    let matches = App::new("tally")
        .about("Tallies a league table from semicolon-delimited match results")
        .arg(
            Arg::with_name("INFILE")
                .help("Sets the input file, reading standard input if omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("order")
                .short("o")
                .long("order")
                .takes_value(true)
                .possible_values(&["asc", "desc"])
                .default_value("desc")
                .help("Sets the ranking order"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["table", "csv"])
                .default_value("table")
                .help("Sets the output format"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Rejects outcomes other than win, draw, or loss"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Logs debug messages to standard error"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    let strict = matches.is_present("strict");
    let games = match matches.value_of("INFILE") {
        Some(infile) => {
            debug!("reading matches from {}", infile);
            tally::read_matches(infile, strict)?
        }
        None => {
            debug!("reading matches from standard input");
            let stdin = io::stdin();
            if strict {
                tally::parse_matches_strict(stdin.lock())?
            } else {
                tally::parse_matches(stdin.lock())?
            }
        }
    };

    let order: Order = matches.value_of("order").unwrap_or("desc").parse()?;
    let mut table = Table::build(&games);
    table.sort(order);

    let stdout = io::stdout();
    match matches.value_of("format") {
        Some("csv") => tally::render::write_csv(&table, stdout.lock())?,
        _ => tally::render::write_text(&table, stdout.lock())?,
    }
    Ok(())
}
