//! Lines of Action core logic.
//!
//! このクレートは盤面ルールを管理する `engine` と、手を選択する `ai` を提供します。
//! 対局進行や入出力（`loa_cli` など）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・終局判定を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;

/// `tracing` の購読者（ログ出力先）を初期化するモジュール。
pub mod logging;
