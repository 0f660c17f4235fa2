pub mod affects;
pub mod check;
pub mod order;
pub mod parse;
pub mod roles;
