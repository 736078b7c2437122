pub mod board;
pub mod movegen;
pub mod game;
pub mod view;
pub mod config;
pub mod console;
