// API Routes Module

pub mod cipher_suites;
pub mod health;
pub mod pages;
pub mod rfcs;
pub mod search;
