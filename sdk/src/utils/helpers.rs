// ------------------- ADDRESS DISPLAY -------------------
const SHORT_ADDRESS_CHARS: usize = 4;

/// Returns `first4...last4` for an address, or the address unchanged when it is too short to
/// shorten.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= SHORT_ADDRESS_CHARS * 2 {
        return address.to_string();
    }

    let head: String = chars[..SHORT_ADDRESS_CHARS].iter().collect();
    let tail: String = chars[chars.len() - SHORT_ADDRESS_CHARS..].iter().collect();
    format!("{head}...{tail}")
}

pub fn get_explorer_url(explorer_base_url: &str, address: &str) -> String {
    format!("{}/{}", explorer_base_url.trim_end_matches('/'), address)
}
