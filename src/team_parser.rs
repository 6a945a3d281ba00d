use anyhow::Context;
use scraper::{ElementRef, Selector};

use crate::{
    html::{trimmed_text, ParsedPage, Selectable},
    schema::TeamRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum TeamRowError {
    #[error("Cell `{cell}` was not found in a team row")]
    MissingCell { cell: &'static str },
}

pub fn parse(page: &ParsedPage) -> anyhow::Result<Vec<TeamRecord>> {
    page.team_rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| parse_team_row(row).with_context(|| format!("Failed to parse team row {i}")))
        .collect()
}

fn parse_team_row(row: ElementRef) -> anyhow::Result<TeamRecord> {
    macro_rules! cell {
        ($css: literal) => {
            find_cell(row, selector!($css), $css)?
        };
    }
    Ok(TeamRecord::builder()
        .team_name(cell!("td.name"))
        .year(cell!("td.year"))
        .wins(cell!("td.wins"))
        .losses(cell!("td.losses"))
        .ot_losses(cell!("td.ot-losses"))
        .win_pct(cell!("td.pct"))
        .goals_for(cell!("td.gf"))
        .goals_against(cell!("td.ga"))
        .goal_difference(cell!("td.diff"))
        .build())
}

fn find_cell(
    row: ElementRef,
    selector: &Selector,
    cell: &'static str,
) -> Result<String, TeamRowError> {
    row.select_one(selector)
        .map(trimmed_text)
        .ok_or(TeamRowError::MissingCell { cell })
}
