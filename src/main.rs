pub mod args;
pub mod classify;
pub mod cli;
pub mod describe;
pub mod emit;
pub mod idents;
pub mod model;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
