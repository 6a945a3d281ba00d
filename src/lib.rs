#[macro_use]
pub mod macros;

pub mod api;
pub mod html;
pub mod schema;
pub mod team_parser;
