//! Print the tag tree stored in an NBT file.
//!
//! ```text
//! nbt-dump level.dat
//! nbt-dump level.dat --path .Data.SpawnX --raw
//! nbt-dump level.dat --path .Data.Player.Inventory[0] --json
//! ```
use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use log::{debug, error};
use nbtag_tools::{to_json, TreePrinter};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn run(matches: &ArgMatches) -> Result<()> {
    let file = matches.value_of("file").ok_or("no file given")?;
    let path = matches.value_of("path").unwrap_or("");

    let root = nbtag::load::load_file(file)?;
    debug!("loaded {} with {} root entries", file, root.len());

    let selected = root.query(path)?;

    if matches.is_present("json") {
        println!("{}", to_json(selected)?);
        return Ok(());
    }

    // Label the selection the way it was asked for, or by file for the root.
    let key = if path.is_empty() { file } else { path };

    let stdout = std::io::stdout();
    let mut printer = TreePrinter::new(stdout.lock(), matches.is_present("raw"));
    printer.print_selected(selected, key)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("Print the tag tree stored in an NBT file")
        .arg(
            Arg::with_name("file")
                .takes_value(true)
                .required(true)
                .help("NBT file, optionally gzip or zlib compressed"),
        )
        .arg(
            Arg::with_name("path")
                .short("p")
                .long("path")
                .takes_value(true)
                .required(false)
                .help("Dotted path of the tag to print, eg .Data.Player.Inventory[0]"),
        )
        .arg(
            Arg::with_name("raw")
                .short("r")
                .long("raw")
                .takes_value(false)
                .help("Print only values, without tag type or key"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .conflicts_with("raw")
                .help("Print the selection as JSON"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        eprintln!("nbt-dump: {}", e);
        std::process::exit(1);
    }
}
