pub mod cli;
pub mod console;
pub mod game;
pub mod locations;
pub mod logging;
pub mod map;
pub mod scoring;
pub mod storage;
