pub mod run;
pub mod theme;
pub mod validate;
