use crate::server::recognition::gemini::to_recognition_error;
use crate::server::recognition::{RecognitionError, Recognizer};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use std::time::Duration;

const PROMPT: &str = "請辨識這張飲料菜單圖片，提取所有飲料品項和價格。
請以 JSON 格式回傳，格式如下：
[{\"name\": \"品項名稱\", \"price\": 數字價格}, ...]

注意：
- 只提取飲料品項，不要包含其他文字
- 價格必須是數字（不含貨幣符號）
- 如果有大杯/中杯等規格，請分開列出
- 只回傳 JSON 陣列，不要有其他文字";

/// Local Ollama vision model, the last rung on the fallback ladder.
pub(crate) struct OllamaAdapter {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OllamaAdapter {
    pub fn new(base_url: String, model: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            model,
            timeout,
        }
    }
}

impl Recognizer for OllamaAdapter {
    // Ollama takes the image inline; mime type is not part of its contract.
    async fn recognize(&self, image: &[u8], _mime_type: &str) -> Result<String, RecognitionError> {
        let body = serde_json::json!({
            "model": self.model,
            "prompt": PROMPT,
            "images": [STANDARD.encode(image)],
            "stream": false,
        });

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
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
            .get("response")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}
