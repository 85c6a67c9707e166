pub mod run;
pub mod track;
