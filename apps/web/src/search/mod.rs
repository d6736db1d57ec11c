// Search flow: prompt → backend search → result store → result page.
// Also serves single resumes fetched by backend id.

pub mod handlers;
