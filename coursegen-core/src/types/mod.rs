//! Core types used throughout the Coursegen library

pub mod message;
pub mod request;
pub mod response;
