mod args;
mod cli;

pub(crate) use args::take_flag;
pub(crate) use cli::{as_cli, print_usage};
