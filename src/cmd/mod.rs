pub mod list;
pub mod pick;
pub mod shell;
pub mod stats;
