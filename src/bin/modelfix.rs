fn main() -> anyhow::Result<()> {
    modelfix::cli::run_cli()
}
