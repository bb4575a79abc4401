/// Cut `text` to at most `max_chars` characters, ending with `…` when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Backpack", 20), "Backpack");
        assert_eq!(truncate("Backpack", 5), "Back…");
        assert_eq!(truncate("Backpack", 0), "");
        assert_eq!(truncate("Backpack", 8), "Backpack");
    }
}
