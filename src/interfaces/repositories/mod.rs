pub mod achievements;
pub mod education;
pub mod experience;
pub mod memory;
pub mod personal_info;
pub mod projects;
pub mod skills;
