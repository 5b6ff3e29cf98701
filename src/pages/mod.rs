pub mod check_in;
pub mod login;
pub mod signup;
