pub mod defaults;
pub mod flag_store;
pub mod ipc;
pub mod worker;
