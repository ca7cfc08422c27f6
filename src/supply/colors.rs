use log::debug;

/// Splits a marker color field into its `#RRGGBB` components.
///
/// Anything before the first `#` is ignored. Tokens that are not exactly six
/// hex digits are dropped. A field without any `#` yields no colors.
pub fn expand_colors(raw: &str) -> Vec<String> {
    raw.split('#')
        .skip(1)
        .filter(|token| {
            let valid = is_hex_color(token);
            if !valid {
                debug!("Dropping malformed color token '#{token}' from '{raw}'");
            }
            valid
        })
        .map(|token| format!("#{token}"))
        .collect()
}

fn is_hex_color(token: &str) -> bool {
    token.len() == 6 && token.chars().all(|c| c.is_ascii_hexdigit())
}
