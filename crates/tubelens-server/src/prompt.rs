//! Input sanitization and analysis prompt rendering.
//!
//! The prompt is a deterministic function of the sanitized request: fixed
//! Korean instruction template, six required output sections, fields
//! substituted verbatim. Truncation is a plain prefix cut at the stated
//! character counts with no word-boundary adjustment.

use crate::schema::analyze::AnalyzeRequest;

pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const TRANSCRIPT_MAX_CHARS: usize = 8000;

/// Substituted for the transcript section when none was provided.
pub const TRANSCRIPT_PLACEHOLDER: &str = "(없음)";

/// Prefix cut at `max` characters. Operates on `char` boundaries so the
/// result is always valid UTF-8.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Renders the analysis prompt from a sanitized request.
pub fn render(req: &AnalyzeRequest) -> String {
    let title = req.title.as_deref().unwrap_or("");
    let description = truncate_chars(
        req.description.as_deref().unwrap_or(""),
        DESCRIPTION_MAX_CHARS,
    );

    let stats = req.stats.clone().unwrap_or_default();
    let view_count = stats.view_count.unwrap_or(0);
    let like_count = stats.like_count.unwrap_or(0);
    let comment_count = stats.comment_count.unwrap_or(0);
    let duration_seconds = req.duration_seconds.unwrap_or(0);

    let transcript = truncate_chars(
        req.transcript.as_deref().unwrap_or(""),
        TRANSCRIPT_MAX_CHARS,
    );
    let transcript = if transcript.is_empty() {
        TRANSCRIPT_PLACEHOLDER
    } else {
        transcript
    };

    format!(
        "유튜브 영상 분석:\n\
         제목: {title}\n\
         설명: {description}\n\
         조회수: {view_count}\n\
         좋아요: {like_count}\n\
         댓글: {comment_count}\n\
         길이(초): {duration_seconds}\n\
         \n\
         스크립트/자막:\n\
         {transcript}\n\
         \n\
         다음 여섯 항목으로 나눠 분석해줘:\n\
         1. 요약\n\
         2. 서사 구조\n\
         3. 감정 흐름\n\
         4. 시점\n\
         5. 주제/메시지\n\
         6. 썸네일/제목 개선 제안\n"
    )
}
