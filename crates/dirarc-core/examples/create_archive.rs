//! Example: Archiving a directory with dirarc-core
//!
//! Run with: `cargo run --example create_archive`

use dirarc_core::ArchiveCreator;
use dirarc_core::ArchiveFormat;
use dirarc_core::create_jar_archive;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a small tree to archive
    let source = std::env::temp_dir().join("dirarc-example");
    std::fs::create_dir_all(source.join("com/example"))?;
    std::fs::write(source.join("com/example/Hello.class"), b"\xca\xfe\xba\xbe")?;
    std::fs::write(source.join("README.txt"), "Hello, dirarc!")?;

    // Example 1: Free function, one per format
    println!("Example 1: JAR with manifest");
    let report = create_jar_archive("example.jar", &source, None)?;
    println!(
        "  Added {} files and {} directories ({} bytes)",
        report.files_added, report.directories_added, report.bytes_written
    );
    std::fs::remove_file("example.jar")?;

    // Example 2: Builder with a root prefix
    println!("\nExample 2: Builder pattern");
    let report = ArchiveCreator::new()
        .output("example.tar.gz")
        .source(&source)
        .root_prefix("release\\v1")
        .format(ArchiveFormat::TarGz)
        .create()?;
    println!(
        "  Created tar.gz with {} entries, ratio {:.2}",
        report.total_entries(),
        report.compression_ratio()
    );
    std::fs::remove_file("example.tar.gz")?;

    std::fs::remove_dir_all(&source)?;
    println!("\nExamples completed successfully!");
    Ok(())
}
