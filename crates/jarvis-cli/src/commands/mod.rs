pub mod delete;
pub mod dispatch;
pub mod history;
pub mod refresh;
pub mod reset;
pub mod send;
pub mod settings;
pub mod shared;
pub mod status;
pub mod tasks;
