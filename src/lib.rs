pub mod delay_manager;
pub mod listing_parser;
pub mod logger;
pub mod matcher;
pub mod resume_loader;
pub mod salary;
pub mod scraper;
pub mod skill_extractor;
pub mod text_normalizer;
pub mod vocabulary;

// Exporting types for convenience
pub use listing_parser::{JobListing, ListingParser};
pub use matcher::{BestMatch, MatchError, SimilarityMatcher};
pub use salary::SalaryNormalizer;
pub use scraper::KarriereScraper;
pub use skill_extractor::SkillExtractor;
pub use text_normalizer::TextNormalizer;
