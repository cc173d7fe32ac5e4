// tests/support/mocks/mod.rs
//! テスト用のフェイク実装
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod time;

pub use repos::{FailingQuestionRepo, RacingStudentRepo};
pub use security::{FakeEncrypter, FakeHasher};
pub use time::{SteppingClock, fixed_now};
