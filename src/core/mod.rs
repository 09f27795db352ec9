pub mod extractor;
pub mod exporter;
pub mod filter;
pub mod html_parser;
pub mod page_type;
pub mod timetable;
pub mod url_state;
