use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use country_lookup::api::DEFAULT_BASE_URL;
use country_lookup::cards::render_grid;
use country_lookup::{Client, CountryLookup, lookup, storage};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "Enter Country Code: (E.g. Pakistan: pk)";

#[derive(Parser, Debug)]
#[command(
    name = "country",
    version,
    about = "Look up country information from the REST Countries API"
)]
struct Cli {
    /// API base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one country and print its cards (or the raw record).
    Lookup(LookupArgs),
    /// Read one query per line from stdin and redraw after every change. An empty line clears.
    Interactive(InteractiveArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct LookupArgs {
    /// Country code or name (e.g., pk, pakistan)
    query: String,
    /// Output format on stdout.
    #[arg(long, value_enum, default_value_t = OutFormat::Text)]
    format: OutFormat,
    /// Save the result to a file (.json saves the record, .csv saves the cards).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Locale tag for number grouping (en, de, fr, ...).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Cards per row in text output.
    #[arg(long, default_value_t = 3)]
    columns: usize,
}

#[derive(Args, Debug)]
struct InteractiveArgs {
    /// Locale tag for number grouping (en, de, fr, ...).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Cards per row.
    #[arg(long, default_value_t = 3)]
    columns: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let client = Client::with_base_url(cli.base_url);
    match cli.cmd {
        Command::Lookup(args) => cmd_lookup(&client, args),
        Command::Interactive(args) => cmd_interactive(&client, args),
    }
}

fn cmd_lookup(client: &Client, args: LookupArgs) -> Result<()> {
    let mut widget = CountryLookup::new();
    if let Some(ticket) = widget.on_query_change(args.query.as_str()) {
        widget.resolve(lookup::perform(client, ticket));
    }
    let view = widget.view(&args.locale);
    if let Some(err) = &view.error {
        anyhow::bail!("{}", err);
    }
    let Some(record) = widget.record().filter(|_| !view.cards.is_empty()) else {
        eprintln!("No country information for {:?}", args.query);
        return Ok(());
    };

    if let Some(path) = args.out.as_ref() {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json")
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => storage::save_json(record, path)?,
            "csv" => storage::save_cards_csv(&view.cards, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} to {}", args.query, path.display());
    }

    match args.format {
        OutFormat::Text => print!("{}", render_grid(&view.cards, args.columns)),
        OutFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}

fn cmd_interactive(client: &Client, args: InteractiveArgs) -> Result<()> {
    let mut widget = CountryLookup::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    draw(&mut stdout, &widget, &args)?;
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        let Some(ticket) = widget.on_query_change(line) else {
            draw(&mut stdout, &widget, &args)?;
            continue;
        };
        draw(&mut stdout, &widget, &args)?;
        widget.resolve(lookup::perform(client, ticket));
        draw(&mut stdout, &widget, &args)?;
    }
    Ok(())
}

fn draw(out: &mut impl Write, widget: &CountryLookup, args: &InteractiveArgs) -> Result<()> {
    let view = widget.view(&args.locale);
    if view.query.is_empty() {
        writeln!(out, "{}", PROMPT)?;
        out.flush()?;
        return Ok(());
    }
    if view.loading {
        writeln!(out, "Loading...")?;
        return Ok(());
    }
    if let Some(err) = &view.error {
        writeln!(out, "{}", err)?;
    }
    write!(out, "{}", render_grid(&view.cards, args.columns))?;
    out.flush()?;
    Ok(())
}
