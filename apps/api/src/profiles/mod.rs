// Profile link validation for the GitHub and LinkedIn inputs.

pub mod github;
pub mod handlers;
pub mod linkedin;
