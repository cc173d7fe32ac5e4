// src/application/commands/students/mod.rs
mod authenticate;
mod register;
mod service;

pub use authenticate::{AuthenticateStudentCommand, AuthenticateStudentResponse};
pub use register::{RegisterStudentCommand, RegisterStudentResponse};
pub use service::StudentCommandService;
