pub mod defect_model;
pub mod rules;
