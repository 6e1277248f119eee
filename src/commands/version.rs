use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("monkey-viewer version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
