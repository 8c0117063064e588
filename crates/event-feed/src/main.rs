use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use event_core::{
    read_raw_terms, Dimension, EventLoader, EventRecord, FilterParams, FilterSession, FilterSpec,
    MemoryRowSource, Normalizer, Render,
};
use sheets_client::{decode_document, SheetsClient};

mod config;
mod render;

use config::FeedConfig;
use render::TextCardRenderer;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Cards,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "event-feed")]
#[command(about = "Fetch upcoming events from a spreadsheet and filter them")]
struct Args {
    /// Page URL carrying filters (countries, states, games). Defaults to EVENTS_PAGE_URL.
    #[arg(long)]
    url: Option<String>,

    /// Read a saved batchGet JSON document instead of calling the API
    #[arg(long)]
    document: Option<PathBuf>,

    /// Region to fetch (repeatable). Defaults to the URL's states, then EVENTS_DEFAULT_REGION.
    #[arg(long, conflicts_with = "document")]
    region: Vec<String>,

    /// Country filter, comma-separated. Replaces the URL value.
    #[arg(long)]
    countries: Option<String>,

    /// State filter, comma-separated. Replaces the URL value.
    #[arg(long)]
    states: Option<String>,

    /// Game filter, comma-separated. Replaces the URL value.
    #[arg(long)]
    games: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Cards)]
    format: Format,
}

#[derive(Serialize)]
struct FeedOutput<'a> {
    share_url: &'a str,
    filter: &'a FilterSpec,
    total: usize,
    events: Vec<&'a EventRecord>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = FeedConfig::from_env()?;

    let page_url = match &args.url {
        Some(url) => Url::parse(url)?,
        None => config.page_url()?,
    };
    let params = FilterParams::default();

    let normalizer = Normalizer::new(config.normalize_options());
    info!("Formatting dates for locale {:?}", normalizer.locale());
    let loader = EventLoader::new(normalizer, config.default_region.clone())
        .sort_by_start(config.sort_by_start);

    let records = match &args.document {
        Some(path) => {
            let body = fs::read_to_string(path)?;
            let document = decode_document(&body, &path.display().to_string())?;
            loader
                .load(&MemoryRowSource::from_document(&document), &[])
                .await?
        }
        None => {
            let sheets = config.sheets()?;
            let regions = if !args.region.is_empty() {
                args.region.clone()
            } else if sheets.is_region_scoped() {
                read_raw_terms(&page_url, &params.sub_region)
                    .iter()
                    .map(|code| code.to_uppercase())
                    .collect()
            } else {
                Vec::new()
            };

            let client = SheetsClient::new(sheets)?;
            loader.load(&client, &regions).await?
        }
    };

    let mut session = FilterSession::new(records, page_url, params, &FilterSpec::open());
    if args.countries.is_some() || args.states.is_some() || args.games.is_some() {
        let mut spec = session.spec().clone();
        apply_override(&mut spec, Dimension::Region, &args.countries);
        apply_override(&mut spec, Dimension::SubRegion, &args.states);
        apply_override(&mut spec, Dimension::Tag, &args.games);
        session.set_spec(spec);
    }

    let visible = session.visible();
    info!("Showing {} of {} events", visible.len(), session.records().len());

    match args.format {
        Format::Cards => {
            for card in TextCardRenderer.render_all(visible.iter().copied()) {
                println!("{}\n", card);
            }
            println!("Share: {}", session.share_url());
        }
        Format::Json => {
            let output = FeedOutput {
                share_url: session.share_url().as_str(),
                filter: session.spec(),
                total: session.records().len(),
                events: visible,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn apply_override(spec: &mut FilterSpec, dimension: Dimension, raw: &Option<String>) {
    if let Some(raw) = raw {
        spec.set_input(dimension, raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "event-feed",
            "--url",
            "https://events.local/?games=tekken",
            "--region",
            "CA",
            "--region",
            "TX",
            "--format",
            "json",
        ]);
        assert_eq!(args.region, vec!["CA", "TX"]);
        assert!(matches!(args.format, Format::Json));
        assert!(args.document.is_none());
    }

    #[test]
    fn test_region_conflicts_with_document() {
        let result = Args::try_parse_from([
            "event-feed",
            "--document",
            "data/sample.json",
            "--region",
            "CA",
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let args = Args::try_parse_from(["event-feed", "--document", "data/sample.json"]).unwrap();
        assert!(args.region.is_empty());
    }

    #[test]
    fn test_apply_override() {
        let mut spec = FilterSpec::from_inputs("us", "", "tekken");
        apply_override(&mut spec, Dimension::Tag, &Some("Guilty Gear".to_string()));
        apply_override(&mut spec, Dimension::Region, &None);

        assert!(spec.tags.contains("guilty gear"));
        assert!(spec.regions.contains("us"));
    }
}
