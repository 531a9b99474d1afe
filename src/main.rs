use anyhow::Result;

fn main() -> Result<()> {
    manual_search::cli::run()
}
