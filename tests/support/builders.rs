// tests/support/builders.rs
use clomonitor_search::domain::project::{Project, ProjectScore, ResultsPage};

pub struct ProjectBuilder {
    name: String,
    display_name: Option<String>,
    maturity: Option<i64>,
    category: Option<i64>,
    rating: Option<String>,
    score: Option<f64>,
    accepted_at: Option<i64>,
}

impl ProjectBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            maturity: None,
            category: None,
            rating: None,
            score: None,
            accepted_at: None,
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn maturity(mut self, maturity: i64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    pub fn category(mut self, category: i64) -> Self {
        self.category = Some(category);
        self
    }

    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn score(mut self, global: f64) -> Self {
        self.score = Some(global);
        self
    }

    pub fn accepted_at(mut self, secs: i64) -> Self {
        self.accepted_at = Some(secs);
        self
    }

    pub fn build(self) -> Project {
        Project {
            id: format!("id-{}", self.name),
            name: self.name,
            display_name: self.display_name,
            description: None,
            logo_url: None,
            devstats_url: None,
            accepted_at: self.accepted_at,
            maturity: self.maturity,
            category: self.category,
            rating: self.rating,
            score: self.score.map(|global| ProjectScore {
                global,
                ..ProjectScore::default()
            }),
            updated_at: None,
        }
    }
}

/// A page holding one bare project per name.
pub fn page_of(names: &[&str], total_count: u64) -> ResultsPage {
    let items = names
        .iter()
        .map(|name| ProjectBuilder::new(*name).build())
        .collect();
    ResultsPage::new(items, total_count)
}
