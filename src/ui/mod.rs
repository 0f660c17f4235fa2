pub mod context;
pub mod icon;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod views;
