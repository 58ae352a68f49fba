//! Prompt templates. Everything here is a pure function of its inputs.

/// Style directive for generated text. Unknown values read as `Friendly`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Casual,
    Friendly,
    Polite,
    Business,
}

impl From<&str> for Tone {
    fn from(value: &str) -> Self {
        match value {
            "casual" => Tone::Casual,
            "polite" => Tone::Polite,
            "business" => Tone::Business,
            _ => Tone::Friendly,
        }
    }
}

impl Tone {
    pub fn instruction(self) -> &'static str {
        match self {
            Tone::Casual => "语气要非常随意、口语化，就像和好朋友聊天一样。",
            Tone::Friendly => "语气要友好、标准，适合大多数日常场景。",
            Tone::Polite => "语气要礼貌、客气，可以稍微正式一点。",
            Tone::Business => "语气要非常商务、正式，适合工作场合。",
        }
    }
}

pub static ANALYZE_IMAGE: &str = r#"从这张图片中提取所有文字。然后，判断这些文字是什么语言（例如：English, Spanish, Chinese）。最后，将提取的文字翻译成简体中文。
请只返回一个 JSON 对象，不要包含任何额外的解释，字段必须严格如下：
{"originalText": "提取的原文", "language": "检测到的语言", "translatedText": "简体中文翻译"}"#;

static FIDELITY: &str = "请严格保留用户意图中的人称以及主语和宾语的关系，不要把“我”和“你”等指代弄反；不要添加用户意图中没有的内容。";

pub fn generate_message(
    target_language: &str,
    user_intent: &str,
    tone: Tone,
) -> String {
    format!(
        "你是一位精通 {lang} 的语言专家和写作助手。
你的任务是根据用户的意图，用 {lang} 写一条信息。
用户的意图是（用中文描述）：“{intent}”
{tone}
{fidelity}
请直接生成 {lang} 的信息内容，不要包含任何额外的解释或标题。",
        lang = target_language,
        intent = user_intent,
        tone = tone.instruction(),
        fidelity = FIDELITY,
    )
}

pub fn generate_reply(
    original_text: &str,
    language: &str,
    user_intent: &str,
    tone: Tone,
) -> String {
    format!(
        "你是一位精通 {lang} 的语言专家和沟通高手。你的任务是帮我回复一条信息。
原始信息是（用 {lang} 写的）：“{original}”
我想表达的意思是（用中文描述）：“{intent}”
{tone}
{fidelity}
请为我生成一个自然、地道、符合本地人习惯的 {lang} 回复。你的回复应该优先使用 'Hi', 'Hello' 等通用问候语，避免使用和时间相关的问候语（如 'Good morning'），除非在上下文中非常必要和自然。
请直接生成 {lang} 的回复内容，不要包含任何额外的解释或标题。",
        lang = language,
        original = original_text,
        intent = user_intent,
        tone = tone.instruction(),
        fidelity = FIDELITY,
    )
}

pub fn back_translation(language: &str, text: &str) -> String {
    format!(
        "请将以下 {} 文本翻译成自然流畅的中文，只输出译文：\n\n\"{}\"",
        language, text
    )
}
