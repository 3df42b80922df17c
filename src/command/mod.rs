pub mod init;

pub use init::{InitArgs, InitOptions, execute, initialize};
