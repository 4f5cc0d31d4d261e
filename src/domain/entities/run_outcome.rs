//! # RunOutcome Value Object
//!
//! 実行結果の集計

/// 実行結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// 一覧に含まれていたファイル数
    pub total: usize,
    /// アップロードに成功したファイル数
    pub uploaded: usize,
    /// アップロードに失敗したファイル数
    pub failed: usize,
}

impl RunOutcome {
    /// ドライラン用の結果（何もアップロードしていない）
    pub fn dry_run(total: usize) -> Self {
        Self {
            total,
            uploaded: 0,
            failed: 0,
        }
    }

    /// 成功を1件記録
    pub fn record_success(&mut self) {
        self.uploaded += 1;
    }

    /// 失敗を1件記録
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// 全てのアップロードが成功したかチェックします。
    ///
    /// # 戻り値
    ///
    /// 失敗数が0の場合に `true`
    ///
    /// # 例
    ///
    /// ```
    /// use dirpush::domain::entities::run_outcome::RunOutcome;
    ///
    /// // 成功ケース
    /// let success = RunOutcome { total: 5, uploaded: 5, failed: 0 };
    /// assert!(success.is_success());
    ///
    /// // 部分的な失敗
    /// let partial = RunOutcome { total: 5, uploaded: 3, failed: 2 };
    /// assert!(!partial.is_success());
    ///
    /// // 空のディレクトリ
    /// assert!(RunOutcome::default().is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
