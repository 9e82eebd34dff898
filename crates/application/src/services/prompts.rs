//! Instruction templates for the analysis tasks
//!
//! One template per [`AnalysisTask`] variant, taking its typed
//! parameters. The wording is the user-facing contract with the model
//! and is kept in Japanese, matching the audience of the tool.

use domain::AnalysisTask;

/// Render the instruction text for a task
#[must_use]
pub fn instruction(task: &AnalysisTask) -> String {
    match task {
        AnalysisTask::UrlRisk { url } => format!(
            "以下のURLについて、詐欺・フィッシングサイトの可能性を分析してください：\n\
             URL: {url}\n\n\
             以下の観点で分析してください：\n\
             1. ドメイン名の怪しさ\n\
             2. URL構造の特徴\n\
             3. 既知の詐欺パターンとの類似性\n\
             4. 総合的な危険度評価\n\n\
             簡潔で分かりやすく日本語で回答してください。"
        ),
        AnalysisTask::ScreenshotFraud => "この画像を詐欺・フィッシングの観点から分析してください。以下の点を確認してください：\n\n\
             1. 表示されているメッセージや内容の怪しさ\n\
             2. UI/UXデザインの特徴（偽装の可能性）\n\
             3. 表示されているURL、連絡先、金額などの情報\n\
             4. 緊急性を煽る表現や不安を誘う内容\n\
             5. 正規のサービスを装った偽装の可能性\n\
             6. 総合的な危険度評価（低・中・高）\n\n\
             日本語で詳しく分析結果を教えてください。"
            .to_string(),
        AnalysisTask::OcrExtract => "この画像からテキストを正確に抽出してください。\n\
             日本語、英語、数字、記号をすべて読み取って、\n\
             元のレイアウトをできるだけ保持して返してください。"
            .to_string(),
        AnalysisTask::TextFraud { text } => format!(
            "以下のテキストを詐欺・フィッシングの観点から分析してください：\n\n\
             テキスト:\n{text}\n\n\
             分析項目：\n\
             1. 詐欺的表現の検出（緊急性、恐怖心、利益誘導など）\n\
             2. 不自然な日本語や翻訳ソフト特有の表現\n\
             3. 金銭や個人情報を要求する内容\n\
             4. 正規サービスを装った偽装の可能性\n\
             5. 文法や表現の不自然さ\n\
             6. 連絡先情報の妥当性\n\
             7. 総合的な危険度評価\n\n\
             日本語で詳細に分析してください。"
        ),
        AnalysisTask::Naturalness { text } => format!(
            "以下の日本語テキストの不自然さを詳細に分析してください：\n\n\
             テキスト:\n{text}\n\n\
             チェック項目：\n\
             1. 文法的な誤り\n\
             2. 不自然な語彙選択\n\
             3. 翻訳ソフト特有の表現\n\
             4. 敬語の誤用\n\
             5. カタカナ表記の不自然さ\n\
             6. 句読点の使い方\n\
             7. 文体の一貫性\n\
             8. ネイティブスピーカーが書いた可能性\n\n\
             それぞれの問題点を具体的に指摘し、改善案も提示してください。\n\
             最後に、このテキストがネイティブスピーカーによるものか、\n\
             翻訳ソフトや外国人による可能性が高いかを判定してください。"
        ),
        AnalysisTask::ContactLookup { category, query } => format!(
            "以下の{label}について調査してください：\n{query}\n\n\
             調査項目：\n\
             1. この連絡先の一般的な評判や情報\n\
             2. 詐欺や悪質業者としての報告の有無\n\
             3. 正規の企業・サービスとの関連性\n\
             4. インターネット上での言及状況\n\
             5. 注意すべき点や危険性\n\
             6. 信頼度の評価\n\n\
             ※直接的な個人情報は避け、一般的に公開されている情報や\n\
             詐欺対策の観点から有用な情報を提供してください。",
            label = category.label_ja()
        ),
    }
}
