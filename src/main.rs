use clap::Parser;
use hockey_team_scraping::{
    api::{reqwest_client, scrape_teams, FORMS_URL},
    schema::{records_to_pretty_json, QueryParameters, PAGE_NUM_KEY, PER_PAGE_KEY, QUERY_KEY},
};
use log::info;
use url::Url;

#[derive(Parser)]
struct Opts {
    #[arg(long, default_value = FORMS_URL)]
    base_url: Url,
    /// Free-text filter on the team name.
    #[arg(long, default_value = "boston")]
    query: String,
    #[arg(long, default_value = "12")]
    page_num: String,
    /// Walk through every page instead of fetching a single `--page-num`.
    #[arg(long, conflicts_with = "page_num")]
    all_pages: bool,
    /// One of 25, 50, 100; anything else falls back to 100.
    #[arg(long)]
    per_page: Option<String>,
    /// Number of records to print.
    #[arg(long, default_value_t = 25)]
    limit: usize,
}

impl Opts {
    fn query_parameters(&self) -> QueryParameters {
        let mut params = QueryParameters::new();
        params.insert(QUERY_KEY, &self.query);
        if !self.all_pages {
            params.insert(PAGE_NUM_KEY, &self.page_num);
        }
        if let Some(per_page) = &self.per_page {
            params.insert(PER_PAGE_KEY, per_page);
        }
        params
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let client = reqwest_client()?;

    let Some(records) = scrape_teams(&client, &opts.base_url, &opts.query_parameters()).await?
    else {
        println!("An error occurred");
        return Ok(());
    };
    let shown = &records[..records.len().min(opts.limit)];
    info!("Showing {} of {} records", shown.len(), records.len());
    println!("{}", records_to_pretty_json(shown)?);

    Ok(())
}
