pub mod de;
pub mod formatting;
pub mod truncation;
