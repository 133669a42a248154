pub mod build;
pub mod create;
pub mod preview;
pub mod validate;
