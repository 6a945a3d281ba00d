use anyhow::Context;
use log::{debug, info, warn};
use url::Url;

use crate::{
    html::ParsedPage,
    schema::{QueryParameters, TeamRecord, PAGE_NUM_KEY},
    team_parser,
};

pub const FORMS_URL: &str = "https://www.scrapethissite.com/pages/forms/";

/// Where pages come from.  Implemented by `reqwest::Client`.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, url: &Url, params: &QueryParameters) -> anyhow::Result<String>;
}

impl PageSource for reqwest::Client {
    async fn fetch_page(&self, url: &Url, params: &QueryParameters) -> anyhow::Result<String> {
        let response = self.get(url.clone()).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            // The body is parsed anyway; an error page simply has no team rows.
            warn!("Server returned {status:?} for {}", response.url());
        }
        Ok(response.text().await?)
    }
}

pub fn reqwest_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().connection_verbose(true).build()
}

#[derive(Debug)]
pub enum FetchResult {
    /// The first page had no team rows.
    NotFound,
    Pages(Vec<ParsedPage>),
}

impl FetchResult {
    pub fn pages(&self) -> &[ParsedPage] {
        match self {
            FetchResult::NotFound => &[],
            FetchResult::Pages(pages) => pages,
        }
    }
}

pub async fn fetch_team_pages(
    source: &impl PageSource,
    base_url: &Url,
    params: &QueryParameters,
) -> anyhow::Result<FetchResult> {
    let (mut parameters, per_page) = params.with_normalized_per_page();

    let first = download_page(source, base_url, &parameters).await?;
    if first.team_rows().is_empty() {
        info!("No team was found for {parameters:?}");
        return Ok(FetchResult::NotFound);
    }
    let mut pages = vec![first];

    // An explicit page, or no parameters at all, asks for exactly one page.
    if params.contains_key(PAGE_NUM_KEY) || params.is_empty() {
        return Ok(FetchResult::Pages(pages));
    }

    for page_num in 2u32.. {
        parameters.insert(PAGE_NUM_KEY, page_num.to_string());
        let page = download_page(source, base_url, &parameters)
            .await
            .with_context(|| format!("Failed to fetch page {page_num}"))?;
        let row_count = page.team_rows().len();
        if row_count == 0 {
            break;
        }
        pages.push(page);
        if row_count != per_page.row_count() {
            break;
        }
    }
    Ok(FetchResult::Pages(pages))
}

async fn download_page(
    source: &impl PageSource,
    url: &Url,
    parameters: &QueryParameters,
) -> anyhow::Result<ParsedPage> {
    info!("Fetching {url} with {parameters:?}");
    let body = source.fetch_page(url, parameters).await?;
    let page = ParsedPage::parse(&body);
    debug!("Found {} team rows", page.team_rows().len());
    Ok(page)
}

/// Fetches every requested page and extracts the team records from all of them.
///
/// Returns `None` when the first page had no team rows.
pub async fn scrape_teams(
    source: &impl PageSource,
    base_url: &Url,
    params: &QueryParameters,
) -> anyhow::Result<Option<Vec<TeamRecord>>> {
    let pages = match fetch_team_pages(source, base_url, params).await? {
        FetchResult::NotFound => return Ok(None),
        FetchResult::Pages(pages) => pages,
    };
    let mut records = vec![];
    for (i, page) in pages.iter().enumerate() {
        records.extend(
            team_parser::parse(page).with_context(|| format!("Failed to parse page {}", i + 1))?,
        );
    }
    info!("Extracted {} team records from {} pages", records.len(), pages.len());
    Ok(Some(records))
}
