use crate::options::{Explanation, Length, Style, SummaryOptions};

/// System role message sent with every summarization request.
pub const SYSTEM_PROMPT: &str =
    "あなたはYouTube動画の字幕から要約を生成する優秀なAIアシスタントです。";

fn length_directive(length: Length) -> &'static str {
    match length {
        Length::Short => "短く簡潔に（150〜200字程度）",
        Length::Medium => "標準的な長さで（300〜500字程度）",
        Length::Long => "詳細に（800〜1200字程度）",
    }
}

fn style_directive(style: Style) -> &'static str {
    match style {
        Style::Bullet => "重要ポイントを箇条書きで簡潔にまとめる",
        Style::Paragraph => "流れのある文章で全体を要約する",
        Style::Gal => "ギャル口調で要約する",
        Style::Oneesan => "色気のあるお姉さん口調で要約する",
    }
}

// The persona styles carry an extended character block on top of the style
// directive. The wording here is content, not logic.
const GAL_PERSONA: &str = "・口調の指定: 明るいギャル口調で書く。「〜だよ〜」「〜じゃん」「マジで」のようなくだけた言い回しと絵文字を適度に使い、テンション高めでフレンドリーに。ただし要約の正確さは崩さない\n";

const ONEESAN_PERSONA: &str = "・口調の指定: 落ち着いた色気のあるお姉さん口調で書く。「〜かしら」「〜わよ」のような語尾で、余裕のある大人の雰囲気を保つ。ただし要約の正確さは崩さない\n";

fn persona_block(style: Style) -> Option<&'static str> {
    match style {
        Style::Gal => Some(GAL_PERSONA),
        Style::Oneesan => Some(ONEESAN_PERSONA),
        Style::Bullet | Style::Paragraph => None,
    }
}

/// Gloss instruction: annotations are tagged with (補足)/[補足] and placed per
/// section rather than collected at the end.
const EXPLANATION_DIRECTIVE: &str = "・重要キーワードや専門用語、人物などに、動画の要約の趣旨から外れない程度に解説を加える。その解説は、要約内容から引用するのではなく、一般的な知見の立場から補足する。解説は要約の最後にまとめて入れるのではなく、見出しや段落ごとに挿入する。補足には(補足)や[補足]などの記号をつけて、要約内容と区別する\n";

/// Replace ASCII control characters (except CR and LF) with a single space so
/// the text survives JSON encoding on the wire.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if (c as u32) < 32 && c != '\r' && c != '\n' {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Truncate to at most `max_chars` characters, on a char boundary.
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Assemble the user role message: instruction block first, then the caption
/// text, capped at `max_chars` characters.
pub fn build_user_prompt(text: &str, options: &SummaryOptions, max_chars: usize) -> String {
    let text = sanitize(truncate(text, max_chars));

    let persona = persona_block(options.style).unwrap_or("");
    let explanation = match options.explanation {
        Explanation::Include => EXPLANATION_DIRECTIVE,
        Explanation::Exclude => "",
    };

    format!(
        "【要約対象】YouTube動画の字幕テキスト\n\n\
         【要約ルール】\n\
         ・長さ: {length}\n\
         ・形式: {style}\n\
         {persona}{explanation}\
         ・まずは概要や結論を示す。その後、詳細な内容を説明する\n\
         ・重要な概念、キーポイントを漏らさない\n\
         ・原文の正確な情報を保持する\n\
         ・専門用語があれば適切に扱う\n\
         ・簡潔で読みやすい日本語で書く\n\n\
         【字幕テキスト】\n\
         {text}\n",
        length = length_directive(options.length),
        style = style_directive(options.style),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SummaryOptions;

    #[test]
    fn test_sanitize_strips_control_chars() {
        let input = "a\u{0}b\tc\u{1f}d";
        assert_eq!(sanitize(input), "a b c d");
    }

    #[test]
    fn test_sanitize_keeps_newlines() {
        let input = "line one\nline two\r\nline three";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_truncate_shorter_than_cap() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_char_count() {
        let input = "x".repeat(25_000);
        let capped = truncate(&input, 20_000);
        assert_eq!(capped.chars().count(), 20_000);
        assert_eq!(capped, &input[..20_000]);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let input = "あいうえお";
        assert_eq!(truncate(input, 3), "あいう");
    }

    #[test]
    fn test_prompt_contains_length_and_style_directives() {
        let opts = SummaryOptions::parse("short", "paragraph", "exclude");
        let prompt = build_user_prompt("本文", &opts, 1000);
        assert!(prompt.contains("短く簡潔に"));
        assert!(prompt.contains("流れのある文章で全体を要約する"));
    }

    #[test]
    fn test_bullet_with_explanation_has_gloss_but_no_persona() {
        let opts = SummaryOptions::parse("medium", "bullet", "include");
        let prompt = build_user_prompt("本文", &opts, 1000);
        assert!(prompt.contains("重要ポイントを箇条書きで簡潔にまとめる"));
        assert!(prompt.contains("(補足)や[補足]"));
        assert!(!prompt.contains("口調の指定"));
    }

    #[test]
    fn test_persona_block_injected_for_gal() {
        let opts = SummaryOptions::parse("medium", "gal", "exclude");
        let prompt = build_user_prompt("本文", &opts, 1000);
        assert!(prompt.contains("ギャル口調で要約する"));
        assert!(prompt.contains("口調の指定"));
        assert!(!prompt.contains("(補足)や[補足]"));
    }

    #[test]
    fn test_prompt_embeds_exactly_capped_text() {
        let input = "y".repeat(25_000);
        let opts = SummaryOptions::default();
        let prompt = build_user_prompt(&input, &opts, 20_000);
        let embedded = "y".repeat(20_000);
        assert!(prompt.contains(&embedded));
        assert!(!prompt.contains(&"y".repeat(20_001)));
    }
}
