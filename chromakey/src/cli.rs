use clap::Parser;
use std::path::PathBuf;

/// Replace key-colored foreground pixels with the background image.
#[derive(Parser, Debug)]
#[command(name = "chromakey", version, about)]
pub struct Args {
    /// Foreground image, scanned for the key color
    #[arg(short, long)]
    pub foreground: PathBuf,

    /// Background image, substituted for matching pixels
    #[arg(short, long)]
    pub background: PathBuf,

    /// Output path for the composite
    #[arg(short, long)]
    pub output: PathBuf,

    /// Key color as #RRGGBB, RRGGBB or R,G,B
    #[arg(short, long, value_parser = parse_key_color)]
    pub key: Option<[u8; 3]>,

    /// Sample the key color from the foreground at X,Y (overrides --key)
    #[arg(short, long, value_name = "X,Y", value_parser = parse_coordinate)]
    pub pick: Option<(u32, u32)>,

    /// Per-channel tolerance around the key color
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=150))]
    pub threshold: Option<u32>,
}

fn parse_key_color(spec: &str) -> Result<[u8; 3], String> {
    compositor::picker::parse_key_color(spec).map_err(|e| e.to_string())
}

fn parse_coordinate(spec: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = spec.trim().split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("expected X,Y, got: {spec}"));
    }

    let x = parts[0]
        .parse::<u32>()
        .map_err(|_| format!("invalid coordinate: {}", parts[0]))?;
    let y = parts[1]
        .parse::<u32>()
        .map_err(|_| format!("invalid coordinate: {}", parts[1]))?;

    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_color_reports_clap_friendly_errors() {
        assert_eq!(parse_key_color("#00ff00"), Ok([0, 255, 0]));
        assert!(parse_key_color("green").unwrap_err().contains("expected"));
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("10,20"), Ok((10, 20)));
        assert_eq!(parse_coordinate(" 0 , 0 "), Ok((0, 0)));
        assert!(parse_coordinate("10").is_err());
        assert!(parse_coordinate("10,-2").is_err());
        assert!(parse_coordinate("a,b").is_err());
    }
}
