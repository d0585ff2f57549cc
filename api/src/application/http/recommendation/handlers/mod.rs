pub mod recommend_supplements;
