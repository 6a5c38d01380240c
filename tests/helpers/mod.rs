pub mod build_helpers;
pub mod source_fixtures;
