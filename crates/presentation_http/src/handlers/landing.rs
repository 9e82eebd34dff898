//! Landing view handler
//!
//! Serves the informational payload: feature overview, credential setup
//! instructions and the advisory block with consultation hotlines. Check
//! handlers reuse the same payload when no credential is configured.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// One feature of the service, as presented to the operator
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub name: String,
    pub details: Vec<String>,
}

/// A consultation contact for suspected fraud
#[derive(Debug, Clone, Serialize)]
pub struct Hotline {
    pub name: String,
    pub contact: String,
}

/// Usage notes plus where to turn for help
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    pub notes: Vec<String>,
    pub hotlines: Vec<Hotline>,
}

/// Landing payload
#[derive(Debug, Clone, Serialize)]
pub struct LandingResponse {
    pub service: String,
    pub tagline: String,
    /// Whether a Gemini credential is configured for this session
    pub credential_configured: bool,
    /// Shown when no credential is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_notice: Option<String>,
    pub features: Vec<Feature>,
    pub api_key_instructions: Vec<String>,
    pub advisory: Advisory,
}

fn feature(name: &str, details: &[&str]) -> Feature {
    Feature {
        name: name.to_string(),
        details: details.iter().map(ToString::to_string).collect(),
    }
}

/// Build the landing payload
#[must_use]
pub fn payload(credential_configured: bool) -> LandingResponse {
    LandingResponse {
        service: "🔒 セキュリティチェッカー".to_string(),
        tagline: "詐欺・フィッシング対策のための包括的なセキュリティチェックツール".to_string(),
        credential_configured,
        credential_notice: (!credential_configured)
            .then(|| "Google AI API キーを設定してください".to_string()),
        features: vec![
            feature(
                "🌐 URLチェック",
                &[
                    "URLの安全性を多角的に分析",
                    "SSL証明書の確認",
                    "詐欺サイトのパターン検出",
                ],
            ),
            feature(
                "📱 スクリーンショット分析",
                &[
                    "怪しいメッセージやサイトの画像を分析",
                    "フィッシング詐欺の特徴を検出",
                ],
            ),
            feature(
                "📄 OCR + テキスト分析",
                &[
                    "画像からテキストを抽出",
                    "詐欺メッセージの特徴を分析",
                    "連絡先情報の自動抽出",
                ],
            ),
            feature(
                "✍️ 日本語チェック",
                &[
                    "不自然な日本語表現を検出",
                    "翻訳ソフト特有の表現を識別",
                ],
            ),
            feature(
                "📞 連絡先検索",
                &[
                    "電話番号やメールアドレスの調査",
                    "悪質業者の可能性をチェック",
                ],
            ),
        ],
        api_key_instructions: vec![
            "Google AI Studio (https://aistudio.google.com/) にアクセス".to_string(),
            "「Get API key」をクリック".to_string(),
            "新しいプロジェクトでAPI キーを作成".to_string(),
        ],
        advisory: Advisory {
            notes: vec![
                "このツールの結果は参考情報です".to_string(),
                "最終判断は複数の情報源で確認してください".to_string(),
                "個人情報の取り扱いには十分注意してください".to_string(),
                "疑わしい場合は専門機関に相談してください".to_string(),
            ],
            hotlines: vec![
                Hotline {
                    name: "消費者ホットライン".to_string(),
                    contact: "188".to_string(),
                },
                Hotline {
                    name: "警察相談専用電話".to_string(),
                    contact: "#9110".to_string(),
                },
                Hotline {
                    name: "フィッシング対策協議会".to_string(),
                    contact: "https://www.antiphishing.jp/".to_string(),
                },
            ],
        },
    }
}

/// Serve the landing view
pub async fn landing(State(state): State<AppState>) -> Json<LandingResponse> {
    Json(payload(state.analysis.is_some()))
}
