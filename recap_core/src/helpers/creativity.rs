/// Slider labels, one per creativity level 0 through 10.
pub const CREATIVITY_LABELS: [&str; 11] = [
    "Factual",
    "Very Precise",
    "Precise",
    "Balanced-",
    "Balanced",
    "Balanced+",
    "Creative-",
    "Creative",
    "Very Creative",
    "Imaginative",
    "Visionary",
];

pub fn label(level: u8) -> &'static str {
    CREATIVITY_LABELS[usize::from(level.min(10))]
}

/// Instruction bands at 1, 3, 5 and 7. Independent from the temperature
/// scaling below; the two tables are not derived from each other.
pub fn system_prompt(level: u8) -> &'static str {
    if level <= 1 {
        return "You are a factual summarizer. Extract key facts and data points. Use bullet points.";
    }
    if level <= 3 {
        return "You are a professional summarizer. Provide a clear, concise summary suitable for a business report.";
    }
    if level <= 5 {
        return "You are a balanced summarizer. Provide an easy-to-read, engaging summary.";
    }
    if level <= 7 {
        return "You are a creative summarizer. Use vivid language and perhaps a metaphor to make the summary interesting.";
    }
    "You are a visionary storyteller. Transform the text into a compelling narrative or a bold, forward-looking statement."
}

/// Scale the 0-10 slider value onto the completion API's 0-1 range.
pub fn temperature(level: u8) -> f32 {
    f32::from(level.min(10)) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_levels_map_to_distinct_labels_and_prompts() {
        assert!(!label(0).is_empty());
        assert!(!label(10).is_empty());
        assert_ne!(label(0), label(10));
        assert_ne!(system_prompt(0), system_prompt(10));
    }

    #[test]
    fn test_level_five_is_the_balanced_band() {
        assert_eq!(label(5), "Balanced+");
        assert!(system_prompt(5).contains("balanced summarizer"));
        assert_eq!(system_prompt(4), system_prompt(5));
        assert_ne!(system_prompt(5), system_prompt(6));
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(system_prompt(0), system_prompt(1));
        assert_ne!(system_prompt(1), system_prompt(2));
        assert_eq!(system_prompt(6), system_prompt(7));
        assert_ne!(system_prompt(7), system_prompt(8));
        assert_eq!(system_prompt(8), system_prompt(10));
    }

    #[test]
    fn test_temperature_is_level_divided_by_ten() {
        assert_eq!(temperature(0), 0.0);
        assert_eq!(temperature(7), 0.7);
        assert_eq!(temperature(10), 1.0);
    }

    #[test]
    fn test_out_of_range_level_is_clamped() {
        assert_eq!(label(12), "Visionary");
        assert_eq!(temperature(12), 1.0);
    }
}
