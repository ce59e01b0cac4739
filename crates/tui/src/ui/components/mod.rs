pub mod card;
pub mod hints;
pub mod money;
