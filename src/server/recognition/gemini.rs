use crate::server::recognition::{RecognitionError, Recognizer};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use std::time::Duration;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const PROMPT: &str = "你是專業的台灣飲料店菜單 OCR 辨識系統。

【任務】從這張菜單圖片中提取所有飲料品項。

【輸出格式】嚴格的 JSON 陣列：
[{\"name\":\"完整飲料名稱\",\"price\":中杯價格數字,\"category\":\"分類名稱\"}]

【辨識規則】
1. 逐區塊掃描：菜單可能分多欄、多區塊，請完整掃描每個區域
2. 飲料名稱：使用完整中文名稱
3. 價格處理：M/L 兩種價格時取 M（中杯）價格；價格必須是整數，不含 $ 或 元
4. 分類：根據菜單區塊標題判斷
5. 排除非飲料項目：加料、配料、冰度甜度說明等不要列入

【輸出】只輸出 JSON 陣列，不要任何其他文字：";

/// Gemini generateContent adapter.
pub(crate) struct GeminiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiAdapter {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: GEMINI_BASE_URL.to_string(),
            api_key,
            model,
            timeout,
        }
    }
}

impl Recognizer for GeminiAdapter {
    async fn recognize(&self, image: &[u8], mime_type: &str) -> Result<String, RecognitionError> {
        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": PROMPT },
                    {
                        "inline_data": {
                            "mime_type": mime_type,
                            "data": STANDARD.encode(image),
                        }
                    }
                ]
            }],
            "generationConfig": {
                "temperature": 0.1,
                "maxOutputTokens": 16384,
            }
        });

        let response = self
            .client
            .post(format!(
                "{}/{}:generateContent?key={}",
                self.base_url, self.model, self.api_key
            ))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(to_recognition_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognitionError::Provider {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await.map_err(to_recognition_error)?;
        Ok(payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

pub(super) fn to_recognition_error(e: reqwest::Error) -> RecognitionError {
    if e.is_timeout() {
        RecognitionError::Timeout
    } else {
        RecognitionError::Transport {
            message: e.to_string(),
        }
    }
}
