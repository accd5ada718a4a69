use karriere_matcher_lib::{delay_manager, logger, resume_loader};
use karriere_matcher_lib::{KarriereScraper, ListingParser, SimilarityMatcher, SkillExtractor, TextNormalizer};

use std::env;
use std::error::Error;
use std::fs::File;
use log::{info, warn, error};
use scraper::Html;

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    info!("Starting Karriere Matcher...");

    // Args: query (URL-friendly), number of pages, resume path.
    let args: Vec<String> = env::args().collect();
    let query = args.get(1).cloned().unwrap_or_else(|| "data-engineer".to_string());
    let num_pages: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2);
    let resume_path = args.get(3).cloned().unwrap_or_else(|| "cv.pdf".to_string());

    let scraper_instance = KarriereScraper::new();
    let parser = ListingParser::new();

    // 1. Scrape search pages and collect listings
    let mut listings = Vec::new();
    for page in 1..=num_pages {
        if page > 1 {
            delay_manager::random_page_delay();
        }
        match scraper_instance.fetch_search_page(&query, page) {
            Some(html) => {
                let document = Html::parse_document(&html);
                let page_listings = parser.parse_page(&document);
                info!("Page {}: {} listings", page, page_listings.len());
                listings.extend(page_listings);
            }
            None => warn!("Skipping page {} (fetch failed)", page),
        }
    }

    if listings.is_empty() {
        error!("No job listings found for query '{}'", query);
        return Ok(());
    }

    // 2. Fetch each listing's detail page for description and skills
    for listing in listings.iter_mut() {
        let url = match &listing.url {
            Some(u) => u.clone(),
            None => continue,
        };
        delay_manager::random_page_delay();
        if let Some(html) = scraper_instance.fetch_page(&url) {
            let document = Html::parse_document(&html);
            listing.description = parser.parse_description(&document);
            listing.skills = parser.extract_skills(&listing.description);
        } else {
            warn!("No description available for {}", url);
        }
    }

    // 3. Persist listings to CSV
    let output_csv = "karriere_listings.csv";
    let file = File::create(output_csv)?;
    let mut csv_writer = csv::Writer::from_writer(file);
    csv_writer.write_record([
        "title", "company", "locations", "type", "home_office", "salary_monthly", "url", "skills",
    ])?;
    for listing in &listings {
        csv_writer.write_record([
            listing.title.clone().unwrap_or_default(),
            listing.company.clone().unwrap_or_default(),
            listing.locations.as_ref().map(|l| l.join("; ")).unwrap_or_default(),
            listing.employment_type.clone().unwrap_or_default(),
            listing.home_office.clone().unwrap_or_default(),
            listing.salary_monthly.map(|s| s.to_string()).unwrap_or_default(),
            listing.url.clone().unwrap_or_default(),
            listing.skills.join(", "),
        ])?;
    }
    csv_writer.flush()?;
    info!("Saved {} listings to {}", listings.len(), output_csv);

    // 4. Load resume and build the match query
    let resume_text = match resume_loader::load_resume_text(&resume_path) {
        Some(t) => t,
        None => {
            error!("Cannot match without a resume. Place one at '{}'.", resume_path);
            return Ok(());
        }
    };
    let skill_extractor = SkillExtractor::with_default_vocabulary();
    let resume_skills = skill_extractor.extract(&resume_text);
    info!("Skills from resume: {}", resume_skills.join(", "));

    let normalizer = TextNormalizer::new();
    let match_query = normalizer.normalize(&format!("{} {}", resume_text, resume_skills.join(" ")));

    // 5. Rank listings against the resume
    let corpus: Vec<String> = listings.iter().map(|l| l.description.clone()).collect();
    let matcher = SimilarityMatcher::new();
    let best = matcher.find_best_match(&match_query, &corpus)?;
    let best_job = &listings[best.index];

    info!("Best matching job (similarity {:.3}):", best.score);
    info!("  Title:   {}", best_job.title.as_deref().unwrap_or("unknown"));
    info!("  Company: {}", best_job.company.as_deref().unwrap_or("unknown"));
    info!("  Link:    {}", best_job.url.as_deref().unwrap_or("unknown"));
    info!("  Skills required for the job: {}", best_job.skills.join(", "));

    Ok(())
}
