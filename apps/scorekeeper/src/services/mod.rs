pub mod replay;
pub mod score_card;
