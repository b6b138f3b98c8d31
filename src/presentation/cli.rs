// src/presentation/cli.rs
use clap::Parser;

use crate::{
    domain::{
        errors::DomainResult,
        search::{
            PageNumber, PageSize, SearchPreferences, SortBy, SortDirection, SortOptions,
            query_string,
        },
    },
    presentation::search_page::{ProjectCard, SearchPageView},
};

#[derive(Debug, Parser)]
#[command(name = "clomonitor-search", version, about = "Search CLOMonitor projects")]
pub struct Cli {
    /// Search query string as it appears in the dashboard URL,
    /// e.g. `?text=helm&maturity=2&rating=a`.
    #[arg(default_value = "")]
    pub query: String,

    /// Jump to this results page.
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page. Remembered for later searches.
    #[arg(long)]
    pub limit: Option<PageSize>,

    /// Sort field (`name` or `score`). Remembered for later searches.
    #[arg(long)]
    pub sort_by: Option<SortBy>,

    /// Sort direction (`asc` or `desc`). Remembered for later searches.
    #[arg(long)]
    pub direction: Option<SortDirection>,

    /// Start the listing at this project, once it is laid out.
    #[arg(long)]
    pub anchor: Option<String>,

    /// Print the page as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The location query to open, with `--page` applied.
    pub fn initial_query(&self) -> DomainResult<String> {
        let mut criteria = query_string::decode(&self.query);
        if let Some(page) = self.page {
            criteria.page = PageNumber::new(page)?;
        }
        Ok(query_string::encode(&criteria))
    }

    /// `current` with any command-line overrides applied.
    pub fn preferences(&self, current: SearchPreferences) -> SearchPreferences {
        SearchPreferences {
            limit: self.limit.unwrap_or(current.limit),
            sort: SortOptions::new(
                self.sort_by.unwrap_or(current.sort.by),
                self.direction.unwrap_or(current.sort.direction),
            ),
        }
    }
}

/// Plain-text rendering of the search page.
pub fn render(view: &SearchPageView) -> String {
    render_from(view, None)
}

/// Like [`render`], but when `anchor` names a listed project the listing
/// starts at that project.
pub fn render_from(view: &SearchPageView, anchor: Option<&str>) -> String {
    let mut lines = vec![view.status_line.clone()];

    if !view.chips.is_empty() {
        let chips: Vec<String> = view
            .chips
            .iter()
            .map(|chip| format!("[{}: {}]", chip.name, chip.label))
            .collect();
        lines.push(format!("Filters: {}", chips.join(" ")));
    }

    if let Some(error) = &view.error {
        lines.push(format!("! search failed: {error}"));
    }

    if let Some(empty) = &view.empty_state {
        lines.push(String::new());
        lines.push(empty.message.clone());
        lines.push(format!("You can {} or try a new search.", empty.action_label()));
    } else if let Some(cards) = &view.cards {
        lines.push(String::new());
        let first = view.pagination.range().map_or(1, |(first, _)| first);
        let skip = anchor
            .and_then(|anchor| cards.iter().position(|card| card.name == anchor))
            .unwrap_or(0);
        for (index, card) in (first..).zip(cards).skip(skip) {
            lines.extend(card_lines(index, card));
        }

        if view.pagination.total_pages() > 1 {
            lines.push(String::new());
            lines.push(format!(
                "Page {} of {}",
                view.pagination.active,
                view.pagination.total_pages()
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn card_lines(index: u64, card: &ProjectCard) -> Vec<String> {
    let facets: Vec<&str> = [&card.maturity, &card.category, &card.rating]
        .into_iter()
        .filter_map(|facet| facet.as_deref())
        .collect();
    let score = card
        .score
        .map(|score| format!(" · score {score:.0}"))
        .unwrap_or_default();

    let mut lines = vec![format!("{index:>4}. {} ({}){score}", card.title, facets.join(" · "))];
    if let Some(description) = card.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("      {description}"));
    }
    lines
}
