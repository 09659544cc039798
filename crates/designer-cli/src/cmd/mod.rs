pub mod agent;
pub mod get;
pub mod idea;
pub mod init;
pub mod mcp;
pub mod update;
pub mod validate;
