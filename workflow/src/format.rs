//! Text shown in the results panel.

/// Group digits by thousands with commas: `1200` → `"1,200"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"1,200 characters"`
pub fn text_length_label(text_length: u64) -> String {
    format!("{} characters", thousands(text_length))
}

/// Whether a real model produced the cards, or the service fell back.
pub fn ai_used_label(ai_used: bool) -> &'static str {
    if ai_used {
        "✅ Yes"
    } else {
        "❌ No (Mock Data)"
    }
}

/// Card heading, numbered from 1.
pub fn question_heading(index: usize) -> String {
    format!("Question {}", index + 1)
}
