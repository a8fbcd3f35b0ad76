/*
 * Responsibility
 * - Handler から見える「取り出し済み API key」の型
 * - middleware が request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 形式チェック済みであって、key が有効かどうかは未検証
 */

/// Token taken from `Authorization: ApiKey <token>`, unmodified.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// key を誤ってログに出さない
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_leak_key() {
        let key = ApiKey("testkey123".to_string());
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("testkey123"));
        assert_eq!(key.as_str(), "testkey123");
    }
}
