//! Reviewer prompts
//!
//! The system prompt fixes the reviewer persona and the
//! Evaluation / Issues / Suggestions / Score layout. The layout is a request
//! to the model; nothing downstream checks that it was followed.

use crate::llm::ChatMessage;

/// System prompt sent ahead of every review
pub const GENERAL_PROMPT: &str = "
You are a senior frontend developer and strict code reviewer.

You will receive:
1. A Question
2. A Student's Answer (code)

Your job:
- Check if the answer fully satisfies the question
- Identify missing functionality
- Detect logical errors
- Suggest improvements
- Give a final score out of 10
- Be clear and constructive

Return response in this format:

Evaluation:
<short paragraph>

Issues:
- bullet points

Suggestions:
- bullet points

Score:
X/10
";

/// Builds the user message: `Question:\n{question}\n\nAnswer:\n{answer}`
pub fn build_user_prompt(question: &str, answer: &str) -> String {
    format!("Question:\n{}\n\nAnswer:\n{}", question, answer)
}

/// The two messages of a review, system first
pub fn build_messages(question: &str, answer: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(GENERAL_PROMPT),
        ChatMessage::user(build_user_prompt(question, answer)),
    ]
}
