pub mod signup;
pub mod validation;
