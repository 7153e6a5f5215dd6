pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn estimate_cost(word_count: usize) -> f64 {
    let input_tokens = (word_count as f64 * 1.33).ceil(); // 1 word is approx 1.33 tokens
    let output_tokens = (input_tokens * 0.3).floor(); // assume the summary is 30% of the input
    let input_cost = (input_tokens / 1000.0) * 0.0015; // gpt-3.5-turbo pricing
    let output_cost = (output_tokens / 1000.0) * 0.002;
    input_cost + output_cost
}
