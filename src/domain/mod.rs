// src/domain/mod.rs
pub mod answer;
pub mod attachment;
pub mod comment;
pub mod content;
pub mod errors;
pub mod identity;
pub mod pagination;
pub mod question;
pub mod slug;
pub mod student;
pub mod watched_list;
