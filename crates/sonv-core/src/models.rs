pub mod answer;
pub mod flag;
pub mod interpretation;
pub mod recommendation;
pub mod scale;
pub mod validity;
