// Upload flow: PDF + extraction model → backend multipart upload → thank-you page.

pub mod handlers;
