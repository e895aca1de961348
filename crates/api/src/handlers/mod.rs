pub mod health;
pub mod orders;
pub mod recommendation;
pub mod root;
