//! Terminal front-end for the SFPOPOS directory.
//!
//! # Responsibility
//! - Render the title, filtered card list and footer as plain text.
//! - Drive the list view from stdin lines in interactive mode.
//! - Double as a smoke probe for core linkage (`--ping`).

use clap::Parser;
use log::info;
use sfpopos_core::{
    highlight_matches, init_logging, init_stderr_logging, DataSource, ListView, PlaceCard,
    PlaceStore, Shell, ShellFrame,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "search> ";

#[derive(Debug, Parser)]
#[command(name = "sfpopos", version, about = "Browse San Francisco privately owned public open spaces")]
struct Cli {
    /// Initial search text, matched against title and address.
    query: Option<String>,

    /// Dataset JSON file; defaults to $SFPOPOS_DATA_PATH, then the bundled list.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Read one query per stdin line and re-render after each.
    #[arg(short, long)]
    interactive: bool,

    /// Print the visible cards as JSON instead of text.
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Log level (trace|debug|info|warn|error). Logging is off when omitted.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, value_name = "DIR", requires = "log_level")]
    log_dir: Option<PathBuf>,

    /// Print core linkage info and exit.
    #[arg(long)]
    ping: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.ping {
        println!("sfpopos_core ping={}", sfpopos_core::ping());
        println!("sfpopos_core version={}", sfpopos_core::core_version());
        return Ok(());
    }

    if let Some(level) = cli.log_level.as_deref() {
        match &cli.log_dir {
            Some(dir) => init_logging(level, &dir.to_string_lossy())?,
            None => init_stderr_logging(level)?,
        }
    }

    let source = match &cli.data {
        Some(path) => DataSource::File(path.clone()),
        None => DataSource::from_env(),
    };
    let store = source.load()?;

    let mut view = ListView::new(&store);
    if let Some(query) = cli.query.as_deref() {
        view.set_query(query);
    }

    if cli.json {
        let cards: Vec<&PlaceCard> = view.cards().iter().map(|mounted| &mounted.card).collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_frame(&mut out, &Shell::compose(&view))?;

    if cli.interactive {
        run_interactive(&store, &mut view, std::io::stdin().lock(), &mut out)?;
    }
    Ok(())
}

fn run_interactive(
    store: &PlaceStore,
    view: &mut ListView<'_>,
    input: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<()> {
    info!(
        "event=interactive_start module=cli status=ok records={}",
        store.len()
    );
    write_prompt(out)?;

    for line in input.lines() {
        let line = line?;
        view.set_query(line);
        write_frame(out, &Shell::compose(view))?;
        write_prompt(out)?;
    }
    Ok(())
}

fn write_prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

fn write_frame(out: &mut impl Write, frame: &ShellFrame<'_>) -> std::io::Result<()> {
    writeln!(out, "{}", frame.title.heading)?;
    writeln!(out, "{}", frame.title.subtitle)?;
    writeln!(out)?;

    let query = frame.list.query;
    if frame.list.cards.is_empty() {
        writeln!(out, "  (no places match `{query}`)")?;
    }
    for mounted in frame.list.cards {
        let card = &mounted.card;
        writeln!(out, "  {}", highlight_matches(&card.name, query))?;
        writeln!(out, "    {}", highlight_matches(&card.address, query))?;
        writeln!(out, "    hours: {}", card.hours)?;
        writeln!(out, "    image: {}", card.image)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", frame.footer.text)
}

#[cfg(test)]
mod tests {
    use super::{run_interactive, write_frame, Cli, PROMPT};
    use clap::Parser;
    use sfpopos_core::{ListView, Place, PlaceStore, Shell};

    #[test]
    fn frame_text_highlights_matches_in_order() {
        let store = PlaceStore::from_places(vec![
            Place::new(1, "Empire Park", "Commercial St", "e.jpg", "Open 24 hours"),
            Place::new(2, "Salesforce Park", "425 Mission St", "s.jpg", "6am-9pm"),
        ])
        .unwrap();
        let mut view = ListView::new(&store);
        view.set_query("park");

        let mut buffer = Vec::new();
        write_frame(&mut buffer, &Shell::compose(&view)).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let empire = text.find("Empire [Park]").unwrap();
        let salesforce = text.find("Salesforce [Park]").unwrap();
        assert!(text.starts_with("SFPOPOS\n"));
        assert!(empire < salesforce);
        assert!(text.contains("hours: 6am-9pm"));
    }

    #[test]
    fn frame_text_reports_empty_result() {
        let store =
            PlaceStore::from_places(vec![Place::new(1, "A", "1 A St", "a.jpg", "x")]).unwrap();
        let mut view = ListView::new(&store);
        view.set_query("zzz");

        let mut buffer = Vec::new();
        write_frame(&mut buffer, &Shell::compose(&view)).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("no places match `zzz`"));
    }

    #[test]
    fn interactive_prompt_stays_on_input_line() {
        let store = PlaceStore::from_places(vec![
            Place::new(1, "Empire Park", "Commercial St", "e.jpg", "Open 24 hours"),
            Place::new(2, "Salesforce Park", "425 Mission St", "s.jpg", "6am-9pm"),
        ])
        .unwrap();
        let mut view = ListView::new(&store);

        let mut buffer = Vec::new();
        run_interactive(&store, &mut view, "mission\n".as_bytes(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with(PROMPT));
        assert!(!text.contains("search> \n"));
        assert!(text.ends_with(PROMPT));
        assert_eq!(text.matches(PROMPT).count(), 2);
        assert!(text.contains("Salesforce Park"));
        assert_eq!(view.query(), "mission");
    }

    #[test]
    fn log_dir_requires_log_level() {
        assert!(Cli::try_parse_from(["sfpopos", "--log-dir", "/tmp/x"]).is_err());
        let cli = Cli::try_parse_from(["sfpopos", "post", "--json"]).unwrap();
        assert_eq!(cli.query.as_deref(), Some("post"));
        assert!(cli.json);
    }
}
