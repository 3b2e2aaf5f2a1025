mod client;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client::ProxyPoolClient;
use output::OutputFormat;
use proxypool_core::{
    Category, ColumnFilters, OneProxyRequest, ProxyPoolConfig, ProxyTable, SortField, Sorter,
    SpeedBucket,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_HOST: &str = "http://localhost:7001";

#[derive(Parser)]
#[command(name = "proxypool")]
#[command(about = "Browse the proxy pool and build one-proxy request URLs", long_about = None)]
struct Cli {
    /// Proxy pool base URL (falls back to PROXYPOOL_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available proxies
    List {
        /// Only show this type (repeatable)
        #[arg(short, long = "category", value_parser = parse_category)]
        categories: Vec<Category>,

        /// Only show anonymous (true) or transparent (false) proxies (repeatable)
        #[arg(short, long)]
        anonymous: Vec<bool>,

        /// Column to sort by
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
        order: OrderArg,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Print the request URL for one available proxy
    Url {
        #[command(flatten)]
        selection: Selection,
    },

    /// Fetch one available proxy
    One {
        #[command(flatten)]
        selection: Selection,
    },
}

#[derive(clap::Args)]
struct Selection {
    /// http or https
    #[arg(short, long, value_parser = parse_category)]
    category: Option<Category>,

    /// Speed bucket: 0 (<750ms), 1 (<1500ms), 2 (>=1500ms)
    #[arg(short, long, value_parser = parse_speed)]
    speed: Option<SpeedBucket>,
}

impl Selection {
    fn request(&self) -> OneProxyRequest {
        OneProxyRequest::new(self.category, self.speed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Speed,
    DetectedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

fn parse_category(s: &str) -> std::result::Result<Category, String> {
    Category::from_str(s).ok_or_else(|| format!("unknown category '{}', expected http or https", s))
}

fn parse_speed(s: &str) -> std::result::Result<SpeedBucket, String> {
    SpeedBucket::from_param(s).ok_or_else(|| format!("unknown speed bucket '{}', expected 0, 1 or 2", s))
}

fn sorter(sort: Option<SortArg>, order: OrderArg) -> Option<Sorter> {
    let field = match sort? {
        SortArg::Speed => SortField::Speed,
        SortArg::DetectedAt => SortField::DetectedAt,
    };
    Some(match order {
        OrderArg::Asc => Sorter::ascend(field),
        OrderArg::Desc => Sorter::descend(field),
    })
}

fn get_host(arg: Option<String>) -> String {
    arg.or_else(|| std::env::var("PROXYPOOL_HOST").ok())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

fn load_config(path: Option<&PathBuf>) -> Result<ProxyPoolConfig> {
    match path {
        Some(p) => ProxyPoolConfig::load(p).with_context(|| format!("loading config {}", p.display())),
        None => Ok(ProxyPoolConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let client = ProxyPoolClient::new(&get_host(cli.host), &config);

    match cli.command {
        Commands::List {
            categories,
            anonymous,
            sort,
            order,
            page,
            page_size,
            output,
        } => {
            let filters = ColumnFilters {
                category: categories,
                anonymous,
            };
            cmd_list(&client, &config, filters, sorter(sort, order), page, page_size, output).await?
        }
        Commands::Url { selection } => println!("{}", client.one_url(&selection.request())),
        Commands::One { selection } => cmd_one(&client, &selection.request()).await?,
    }

    Ok(())
}

async fn cmd_list(
    client: &ProxyPoolClient,
    config: &ProxyPoolConfig,
    filters: ColumnFilters,
    sorter: Option<Sorter>,
    page: usize,
    page_size: Option<usize>,
    output: OutputFormat,
) -> Result<()> {
    let mut table = ProxyTable::new(&config.table);
    table.start_loading();
    let result = client.list_proxies().await;
    if let Err(e) = table.settle(result) {
        tracing::warn!("Failed to fetch proxies from {}: {}", client.list_url(), e);
        return Err(e).context("fetching proxy list");
    }

    table.apply(filters, sorter);
    if let Some(size) = page_size {
        table.set_page_size(size);
    }
    table.set_page(page.saturating_sub(1));

    print!("{}", output::render(table.page_items(), output)?);
    if output == OutputFormat::Table {
        println!(
            "  Page {}/{} ({} proxies, {} fetched)",
            table.page() + 1,
            table.page_count(),
            table.total(),
            table.original().len()
        );
    }

    Ok(())
}

async fn cmd_one(client: &ProxyPoolClient, request: &OneProxyRequest) -> Result<()> {
    match client.one_proxy(request).await.context("fetching one proxy")? {
        Some(p) => {
            println!("{}", p.address());
            println!("  Type:       {}", p.category);
            println!("  Speed:      {}", p.speed);
            println!("  Anonymous:  {}", p.anonymous_label());
            println!("  DetectedAt: {}", proxypool_core::format_detected_at(p.detected_at));
        }
        None => println!("No available proxy"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from([
            "proxypool", "list", "-c", "https", "--category", "http", "--anonymous", "true",
            "--sort", "detected-at", "--order", "desc", "--page", "2", "--page-size", "20",
            "-o", "csv",
        ])
        .unwrap();

        let Commands::List { categories, anonymous, sort, order, page, page_size, output } = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(categories, vec![Category::Https, Category::Http]);
        assert_eq!(anonymous, vec![true]);
        assert_eq!(sorter(sort, order), Some(Sorter::descend(SortField::DetectedAt)));
        assert_eq!(page, 2);
        assert_eq!(page_size, Some(20));
        assert_eq!(output, OutputFormat::Csv);
    }

    #[test]
    fn test_parse_url_selection() {
        let cli = Cli::try_parse_from(["proxypool", "url", "--category", "https", "--speed", "1", "--host", "http://pool"]).unwrap();
        assert_eq!(cli.host.as_deref(), Some("http://pool"));
        let Commands::Url { selection } = cli.command else {
            panic!("expected url command");
        };
        assert_eq!(selection.request(), OneProxyRequest::new(Some(Category::Https), Some(SpeedBucket::Medium)));
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["proxypool", "url", "--speed", "5"]).is_err());
        assert!(Cli::try_parse_from(["proxypool", "list", "--category", "socks5"]).is_err());
    }

    #[test]
    fn test_no_sort_without_field() {
        assert_eq!(sorter(None, OrderArg::Desc), None);
    }
}
