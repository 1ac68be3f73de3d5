pub mod lenient;
pub mod roadmap;
pub mod role;
pub mod skills;
