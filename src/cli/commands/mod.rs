//! CLI commands, one module per subcommand

// `move` subcommand
pub mod move_cmd;
pub mod play;
pub mod queens;
pub mod selfplay;
