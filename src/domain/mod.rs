pub mod changelog;
pub mod commit;
