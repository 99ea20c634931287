use super::Session;

/// Display dataset totals in the terminal.
pub fn stats(session: &Session) {
    let path = session.store.path();
    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    println!("Target Statistics");
    println!("{}", "=".repeat(40));
    println!("  Owners:              {}", session.cache.owner_count());
    println!("  Targets:             {}", session.cache.target_count());
    println!("  Max per owner:       {}", session.cache.max_targets());
    println!();
    println!("Data file:             {}", path.display());
    println!("File size:             {}", format_bytes(file_size));
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
