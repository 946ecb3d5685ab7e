fn main() -> anyhow::Result<()> {
    revscrape::cli::run()
}
