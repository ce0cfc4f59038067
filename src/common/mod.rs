pub mod response;

pub use response::{html, redirect};
