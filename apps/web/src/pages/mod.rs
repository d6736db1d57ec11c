//! askama page templates. Templates live in `templates/`.

use askama::Template;

use crate::models::resume::ModelType;
use crate::render::ResumeView;

pub const UPLOAD_MISSING_FILE: &str = "Please upload a PDF";
pub const UPLOAD_FAILED: &str = "Upload failed. Try again.";
pub const UPLOAD_TOO_LARGE: &str = "File is too large to upload";
pub const UPLOAD_MALFORMED: &str = "Upload could not be read. Try again.";
pub const SEARCH_FAILED: &str = "Search failed. Try again.";
pub const NO_RESUME_DATA: &str = "No resume data found.";

#[derive(Template)]
#[template(path = "landing.html")]
pub struct Landing;

/// A radio button on the upload form.
pub struct ModelOption {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadPage {
    pub models: Vec<ModelOption>,
    pub alert: Option<String>,
}

impl UploadPage {
    pub fn new(selected: ModelType, alert: Option<&str>) -> Self {
        Self {
            models: ModelType::ALL
                .iter()
                .map(|m| ModelOption {
                    value: m.as_str(),
                    label: m.label(),
                    checked: *m == selected,
                })
                .collect(),
            alert: alert.map(str::to_string),
        }
    }
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage {
    pub user_prompt: String,
    pub alert: Option<String>,
}

#[derive(Template)]
#[template(path = "search_result.html")]
pub struct ResultPage {
    pub heading: &'static str,
    pub resume: Option<ResumeView>,
    pub empty_message: &'static str,
}

impl ResultPage {
    pub fn new(resume: Option<ResumeView>) -> Self {
        Self {
            heading: "Resume Details",
            resume,
            empty_message: NO_RESUME_DATA,
        }
    }
}

#[derive(Template)]
#[template(path = "thank_you.html")]
pub struct ThankYou;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub title: String,
    pub message: String,
}
