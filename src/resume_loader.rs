use std::fs;
use std::path::Path;

use log::{error, info};

/// Loads the candidate's résumé as plain text. PDF files go through
/// pdf-extract; anything else is read as UTF-8 text. Extraction failures
/// yield None, which the caller reports and aborts on (no résumé, no
/// matching).
pub fn load_resume_text<P: AsRef<Path>>(path: P) -> Option<String> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        error!("Resume file {:?} does not exist.", path_ref);
        return None;
    }

    let is_pdf = path_ref.extension().map_or(false, |ext| ext == "pdf");

    let text = if is_pdf {
        match pdf_extract::extract_text(path_ref) {
            Ok(t) => t,
            Err(e) => {
                error!("Could not extract text from PDF {:?}: {}", path_ref, e);
                return None;
            }
        }
    } else {
        match fs::read_to_string(path_ref) {
            Ok(t) => t,
            Err(e) => {
                error!("Could not read resume file {:?}: {}", path_ref, e);
                return None;
            }
        }
    };

    if text.trim().is_empty() {
        error!("Resume file {:?} contained no text.", path_ref);
        return None;
    }

    info!("Loaded resume text from {:?} ({} chars)", path_ref, text.len());
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_none() {
        assert!(load_resume_text("definitely_not_here.txt").is_none());
    }

    #[test]
    fn test_plain_text_file_is_read() {
        let dir = std::env::temp_dir();
        let path = dir.join("karriere_matcher_resume_test.txt");
        fs::write(&path, "Data Engineer mit SQL und Python").unwrap();
        let text = load_resume_text(&path).unwrap();
        assert!(text.contains("SQL"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_file_yields_none() {
        let dir = std::env::temp_dir();
        let path = dir.join("karriere_matcher_empty_resume.txt");
        fs::write(&path, "   ").unwrap();
        assert!(load_resume_text(&path).is_none());
        fs::remove_file(&path).ok();
    }
}
