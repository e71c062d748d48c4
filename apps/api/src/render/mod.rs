// Document export. HTML only; the browser prints it to PDF.

pub mod handlers;
pub mod html;
