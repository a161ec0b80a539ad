//! Browsers command implementation

use console::Style;
use supported_browsers::IdentifierMap;
use supported_browsers::error::Result;

/// Print the identifier map
pub fn run() -> Result<()> {
    let map = IdentifierMap::reference();
    let width = map.iter().map(|(code, _)| code.len()).max().unwrap_or(0);

    println!("Known browsers ({}):", map.len());
    println!();
    for (code, name) in map.iter() {
        println!(
            "  {:width$}  {}",
            Style::new().cyan().apply_to(code),
            name,
            width = width
        );
    }

    Ok(())
}
