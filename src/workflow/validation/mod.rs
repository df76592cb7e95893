//! Reusable validation rules for form schemas.

pub mod rules;

pub use rules::{
    RuleResult, email_address, free_text, normalize, one_of, optional_text, required_text,
};
