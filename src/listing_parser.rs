use scraper::{ElementRef, Html, Selector};

use crate::salary::SalaryNormalizer;
use crate::skill_extractor::SkillExtractor;
use crate::text_normalizer::TextNormalizer;

/// One scraped posting. Built once per listing item, immutable afterwards.
/// `locations: None` means the listing had no locations container at all,
/// which downstream reporting treats differently from an empty list.
#[derive(Debug, Clone, serde::Serialize)]
pub struct JobListing {
    pub title: Option<String>,
    pub company: Option<String>,
    pub locations: Option<Vec<String>>,
    pub employment_type: Option<String>,
    pub home_office: Option<String>,
    pub salary_monthly: Option<f64>,
    pub url: Option<String>,
    pub description: String,
    pub skills: Vec<String>,
}

/// Turns karriere.at result-list markup into JobListing records. Selectors
/// match the site's m-jobsList item structure.
pub struct ListingParser {
    item_selector: Selector,
    title_selector: Selector,
    company_selector: Selector,
    locations_selector: Selector,
    location_selector: Selector,
    pill_selector: Selector,
    normalizer: TextNormalizer,
    skill_extractor: SkillExtractor,
    salary_normalizer: SalaryNormalizer,
}

impl ListingParser {
    pub fn new() -> Self {
        ListingParser {
            item_selector: Selector::parse("li.m-jobsList__item").unwrap(),
            title_selector: Selector::parse("a.m-jobsListItem__titleLink").unwrap(),
            company_selector: Selector::parse("a.m-jobsListItem__companyName").unwrap(),
            locations_selector: Selector::parse("span.m-jobsListItem__locations").unwrap(),
            location_selector: Selector::parse("a.m-jobsListItem__location").unwrap(),
            pill_selector: Selector::parse("span.m-jobsListItem__pill").unwrap(),
            normalizer: TextNormalizer::new(),
            skill_extractor: SkillExtractor::with_default_vocabulary(),
            salary_normalizer: SalaryNormalizer::new(),
        }
    }

    /// Parses every listing item on a search-result page. Description and
    /// skills stay empty here; they come from the detail page via
    /// `parse_description` / `extract_skills`.
    pub fn parse_page(&self, document: &Html) -> Vec<JobListing> {
        document
            .select(&self.item_selector)
            .map(|item| self.parse_item(item))
            .collect()
    }

    /// A missing anchor yields a None field, never an error; one malformed
    /// item must not sink the whole page.
    fn parse_item(&self, item: ElementRef) -> JobListing {
        let title_anchor = item.select(&self.title_selector).next();
        let title = title_anchor.map(|a| element_text(a));
        let url = title_anchor
            .and_then(|a| a.value().attr("href"))
            .map(|href| href.to_string());

        let company = item
            .select(&self.company_selector)
            .next()
            .map(|a| element_text(a));

        let locations = item.select(&self.locations_selector).next().map(|container| {
            container
                .select(&self.location_selector)
                .map(|loc| element_text(loc))
                .collect::<Vec<_>>()
        });

        // Pills carry employment type, home office and salary; first match
        // per category wins, anything else is ignored.
        let mut employment_type = None;
        let mut home_office = None;
        let mut salary_text: Option<String> = None;
        for pill in item.select(&self.pill_selector) {
            let text = element_text(pill);
            if employment_type.is_none() && (text.contains("Vollzeit") || text.contains("Teilzeit")) {
                employment_type = Some(text);
            } else if home_office.is_none() && text.contains("Homeoffice") {
                home_office = Some(text);
            } else if salary_text.is_none() && text.contains('€') {
                salary_text = Some(text);
            }
        }

        let salary_monthly = salary_text
            .as_deref()
            .and_then(|s| self.salary_normalizer.normalize(s));

        JobListing {
            title,
            company,
            locations,
            employment_type,
            home_office,
            salary_monthly,
            url,
            description: String::new(),
            skills: Vec::new(),
        }
    }

    /// Text of every descendant node of the detail page in document order,
    /// one per line, then normalized. The line breaks matter: the
    /// normalizer's duplicate-line filter works on them.
    pub fn parse_description(&self, document: &Html) -> String {
        let joined = document
            .root_element()
            .text()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        self.normalizer.normalize(&joined)
    }

    pub fn extract_skills(&self, description: &str) -> Vec<String> {
        self.skill_extractor.extract(description)
    }
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}
