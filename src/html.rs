use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

/// Anything that can be queried with a CSS selector.
pub trait Selectable {
    fn select_all<'s>(&'s self, selector: &Selector) -> Vec<ElementRef<'s>>;
    fn select_one<'s>(&'s self, selector: &Selector) -> Option<ElementRef<'s>>;
}

impl Selectable for Html {
    fn select_all<'s>(&'s self, selector: &Selector) -> Vec<ElementRef<'s>> {
        self.select(selector).collect_vec()
    }
    fn select_one<'s>(&'s self, selector: &Selector) -> Option<ElementRef<'s>> {
        self.select(selector).next()
    }
}

impl Selectable for ElementRef<'_> {
    fn select_all<'s>(&'s self, selector: &Selector) -> Vec<ElementRef<'s>> {
        self.select(selector).collect_vec()
    }
    fn select_one<'s>(&'s self, selector: &Selector) -> Option<ElementRef<'s>> {
        self.select(selector).next()
    }
}

/// A downloaded page of the team table.
#[derive(Debug, derive_more::From)]
pub struct ParsedPage(Html);

impl ParsedPage {
    pub fn parse(body: &str) -> Self {
        Self(Html::parse_document(body))
    }

    pub fn team_rows(&self) -> Vec<ElementRef> {
        self.select_all(selector!("tr.team"))
    }
}

impl Selectable for ParsedPage {
    fn select_all<'s>(&'s self, selector: &Selector) -> Vec<ElementRef<'s>> {
        self.0.select_all(selector)
    }
    fn select_one<'s>(&'s self, selector: &Selector) -> Option<ElementRef<'s>> {
        self.0.select_one(selector)
    }
}

/// Concatenated text of all descendants, with surrounding whitespace removed.
pub fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_owned()
}
