/// Resolve a colour name or `#rgb` / `#rrggbb` hex string to RGB.
/// Names are matched case-insensitively with spaces ignored, so
/// "light blue" and "LightBlue" are the same colour.
pub fn resolve_rgb(name: &str) -> Option<(u8, u8, u8)> {
    let name = name.trim();
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }

    let compact: String = name
        .split_whitespace()
        .collect::<String>()
        .to_ascii_lowercase();

    let rgb = match compact.as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "navy" | "navyblue" => (0, 0, 128),
        "lightblue" => (173, 216, 230),
        "cyan" => (0, 255, 255),
        "azure" => (240, 255, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "grey" | "gray" => (190, 190, 190),
        "lightgrey" | "lightgray" => (211, 211, 211),
        "darkgrey" | "darkgray" => (169, 169, 169),
        _ => return None,
    };
    Some(rgb)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}
