// src/services/safety.rs

/// Phrases that mean the user should be talking to emergency services,
/// not a chatbot. Matched as lowercase substrings.
pub const EMERGENCY_PHRASES: [&str; 8] = [
    "chest pain",
    "shortness of breath",
    "severe bleeding",
    "unconscious",
    "heart attack",
    "stroke",
    "bleeding heavily",
    "not breathing",
];

pub const EMERGENCY_REPLY: &str = "⚠️ It sounds like a medical emergency. Please call your local emergency number or visit the nearest hospital immediately.";

/// First emergency phrase found in `msg`, ignoring case.
pub fn detect_emergency(msg: &str) -> Option<&'static str> {
    let msg_lower = msg.to_lowercase();

    EMERGENCY_PHRASES
        .iter()
        .copied()
        .find(|phrase| msg_lower.contains(phrase))
}
