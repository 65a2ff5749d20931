pub mod asset;
pub mod run;
