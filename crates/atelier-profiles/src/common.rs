//! Reglas compartidas entre tablas.
use atelier_core::FieldRule;

pub(crate) const EXPERIENCE_LEVELS: &[&str] = &["beginner", "intermediate", "professional"];

/// Step 1 de los perfiles individuales.
pub(crate) fn basic_information() -> Vec<FieldRule> {
    vec![FieldRule::required("fullName", "Full name is required"),
         FieldRule::email("email", "Valid email is required")]
}

pub(crate) fn location() -> Vec<FieldRule> {
    vec![FieldRule::required("location.city", "City is required"),
         FieldRule::required("location.country", "Country is required")]
}

pub(crate) fn years_of_experience() -> Vec<FieldRule> {
    vec![FieldRule::required("yearsExperience", "Years of experience is required"),
         FieldRule::number_range("yearsExperience", 0.0, 60.0, "Years of experience must be between 0 and 60")]
}

pub(crate) fn bio() -> FieldRule {
    FieldRule::min_length("bio", 20, "Bio must be at least 20 characters")
}

pub(crate) fn portfolio() -> Vec<FieldRule> {
    vec![FieldRule::non_empty_selection("portfolioImages", "Upload at least one portfolio image")]
}

pub(crate) fn terms() -> FieldRule {
    FieldRule::required("agreeToTerms", "You must accept the terms and conditions")
}
