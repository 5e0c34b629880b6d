use tock::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
