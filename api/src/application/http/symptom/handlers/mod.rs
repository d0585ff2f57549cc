pub mod get_symptom;
pub mod get_symptoms;
